//! The top-level unranking engine.
//!
//! [`Engine::new`] builds every table for a fixed size bound; after that the
//! engine is immutable and [`Engine::unrank`] is a pure function of the
//! rank. Tables are read-only, and all per-call scratch lives on the stack,
//! so a shared engine may serve any number of threads concurrently.
//!
//! Ranks are **1-based**: valid inputs are `1..=total()`, matching the
//! `#1, #2, …` numbering of the command-line front-end. Callers with
//! 0-based indices add one before calling.

use log::debug;

use crate::bignat::BigNat;
use crate::emit::{emit, Op};
use crate::error::EngineError;
use crate::rgs::unrank_rgs;
use crate::shape::{unrank_shape, Shape};
use crate::tables::Tables;

/// Largest supported size bound. The block and row tables are cubic in the
/// bound, so this caps their footprint at a few megabytes.
pub const MAX_SIZE_LIMIT: usize = 64;

/// Random-access generator for the Boolean expression family.
///
/// # Example
///
/// ```
/// use expr_rank::{BigNat, Engine};
///
/// let engine = Engine::new(6).unwrap();
/// assert_eq!(engine.total(), BigNat::from(666u64));
/// assert_eq!(engine.unrank(&BigNat::from(3u64)).unwrap(), "AND(A,A)");
/// ```
#[derive(Debug)]
pub struct Engine {
    tables: Tables,
}

impl Engine {
    /// Builds the engine for the given maximum expression size (leaves plus
    /// operators).
    ///
    /// Fails with [`EngineError::Config`] if `max_size` is zero or exceeds
    /// [`MAX_SIZE_LIMIT`].
    pub fn new(max_size: usize) -> Result<Engine, EngineError> {
        if max_size == 0 || max_size > MAX_SIZE_LIMIT {
            return Err(EngineError::Config {
                max_size,
                limit: MAX_SIZE_LIMIT,
            });
        }
        Ok(Engine {
            tables: Tables::new(max_size),
        })
    }

    /// The configured size bound.
    pub fn max_size(&self) -> usize {
        self.tables.max_size()
    }

    /// The underlying tables, for inspection.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Total number of expressions of size `1..=max_size`.
    pub fn total(&self) -> BigNat {
        self.tables.total().clone()
    }

    /// Returns the expression with 1-based rank `rank`.
    ///
    /// Fails with [`EngineError::Bounds`] unless `1 <= rank <= total()`.
    pub fn unrank(&self, rank: &BigNat) -> Result<String, EngineError> {
        if rank.is_zero() || rank > self.tables.total() {
            return Err(EngineError::Bounds {
                rank: rank.clone(),
                total: self.tables.total().clone(),
            });
        }
        let zero_based = rank - &BigNat::one();
        let size = self.layer_of(&zero_based);
        let offset = &zero_based - self.tables.cumulative(size - 1);
        debug!("unrank {}: layer {}, offset {}", rank, size, offset);

        let hit = unrank_shape(&self.tables, size, &offset)?;
        let leaves = hit.binary_count + 1;
        let (op_index, label_index) = hit.variant_offset.divmod(self.tables.bell(leaves))?;
        let ops = decode_ops(op_index, hit.binary_count)?;
        let labels = unrank_rgs(&self.tables, leaves, &label_index);
        let shape = Shape::from_index(&self.tables, size, &hit.index)?;
        Ok(emit(&shape, &ops, &labels))
    }

    /// Smallest `s` with `cumulative(s) > zero_based`; the caller has
    /// already checked `zero_based < total()`.
    fn layer_of(&self, zero_based: &BigNat) -> usize {
        let mut lo = 1;
        let mut hi = self.tables.max_size();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.tables.cumulative(mid) > zero_based {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

/// Splits an operator index into base-3 digits, least significant digit at
/// the last binary node, so the root operator cycles slowest.
fn decode_ops(index: BigNat, count: usize) -> Result<Vec<Op>, EngineError> {
    let three = BigNat::from(3u64);
    let mut ops = vec![Op::And; count];
    let mut rest = index;
    for slot in ops.iter_mut().rev() {
        let (next, digit) = rest.divmod(&three)?;
        *slot = if digit.is_zero() {
            Op::And
        } else if digit == BigNat::one() {
            Op::Or
        } else {
            Op::Xor
        };
        rest = next;
    }
    Ok(ops)
}
