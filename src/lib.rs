//! # expr-rank: Random-Access Enumeration of Boolean Expressions
//!
//! **`expr-rank`** maps the natural numbers `1..=T` bijectively onto the
//! family of Boolean expression strings built from `AND`, `OR`, `XOR`,
//! `NOT`, and variables `A`, `B`, `C`, …. Given an index it returns the
//! unique corresponding expression directly, without generating any
//! predecessor, and given a size bound it reports the total count `T`.
//!
//! ## How It Works
//!
//! Expressions are enumerated layer by layer in increasing tree size. A
//! rank is decomposed in four steps, each guided by a precomputed
//! dynamic-programming table:
//!
//! 1. **Layer**: binary search over cumulative layer weights finds the
//!    expression's total size.
//! 2. **Shape**: block and row weights peel the layer offset down to one
//!    tree shape (which nodes are leaves, `NOT`s, or binary operators).
//! 3. **Operators**: part of the residual becomes a base-3 operator tuple,
//!    one digit per binary node.
//! 4. **Labels**: the remainder indexes a restricted-growth string that
//!    assigns variables to leaves.
//!
//! Counts overflow 64 bits quickly (the layers grow super-exponentially),
//! so everything runs over arbitrary-precision [`BigNat`] values.
//!
//! ## Quick Start
//!
//! ```rust
//! use expr_rank::{BigNat, Engine};
//!
//! // Build tables for expressions of up to 6 nodes.
//! let engine = Engine::new(6).unwrap();
//!
//! assert_eq!(engine.total(), BigNat::from(666u64));
//! assert_eq!(engine.unrank(&BigNat::from(1u64)).unwrap(), "A");
//! assert_eq!(engine.unrank(&BigNat::from(4u64)).unwrap(), "AND(A,B)");
//! ```
//!
//! ## Core Components
//!
//! - **[`engine`]**: The [`Engine`][crate::engine::Engine] front door:
//!   construction, totals, and unranking.
//! - **[`tables`]**: The one-shot DP tables everything else reads.
//! - **[`shape`]**: Arena tree shapes and the in-layer shape unranker.
//! - **[`rgs`]**: Restricted-growth-string unranking.
//! - **[`emit`]**: Prefix-notation rendering.
//! - **[`bignat`]**: The arbitrary-precision integer backend.
//!
//! The enumeration is purely syntactic: distinct parse trees get distinct
//! ranks, and no semantic deduplication or evaluation is attempted.

pub mod bignat;
pub mod emit;
pub mod engine;
pub mod error;
pub mod rgs;
pub mod shape;
pub mod tables;

pub use bignat::BigNat;
pub use engine::{Engine, MAX_SIZE_LIMIT};
pub use error::EngineError;
