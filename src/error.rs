//! Engine error types.

use std::fmt;

use crate::bignat::BigNat;

/// Errors surfaced by the unranking engine and its bignum backend.
///
/// Input-driven failures are reported through this type; internal contract
/// violations (a shape unranker fed an offset outside its layer) are
/// programming errors and panic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested size bound is zero or exceeds the build-time limit.
    Config { max_size: usize, limit: usize },
    /// Rank lies outside `1..=total`.
    Bounds { rank: BigNat, total: BigNat },
    /// Arithmetic contract violation: zero divisor or borrow from zero.
    Arithmetic(&'static str),
    /// Malformed decimal input.
    Parse(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config { max_size, limit } => {
                write!(f, "unsupported size bound {} (supported: 1..={})", max_size, limit)
            }
            EngineError::Bounds { rank, total } => {
                write!(f, "rank {} out of range 1..={}", rank, total)
            }
            EngineError::Arithmetic(msg) => write!(f, "arithmetic error: {}", msg),
            EngineError::Parse(input) => write!(f, "malformed decimal input: {:?}", input),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::Config { max_size: 100, limit: 64 };
        assert_eq!(err.to_string(), "unsupported size bound 100 (supported: 1..=64)");

        let err = EngineError::Bounds {
            rank: BigNat::from(7u64),
            total: BigNat::from(2u64),
        };
        assert_eq!(err.to_string(), "rank 7 out of range 1..=2");

        let err = EngineError::Parse("12x".to_string());
        assert_eq!(err.to_string(), "malformed decimal input: \"12x\"");
    }
}
