//! Error types returned by the solvers and the batching planner.

use thiserror::Error;

/// Reasons a `(length, prices)` pair is rejected before any solving starts.
///
/// Each variant names the rule that failed; rules are checked in declaration
/// order and only the first failure is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("rod length must be positive, got {length}")]
    NonPositiveLength { length: i64 },

    #[error("price table is empty")]
    EmptyPrices,

    #[error("price table has {prices} entries but rod length is {length}")]
    LengthMismatch { length: i64, prices: usize },

    /// `piece` is the 1-based piece length whose price is not positive.
    #[error("price for piece length {piece} must be positive")]
    NonPositivePrice { piece: usize },

    /// Revenue for `sub_length` does not fit the price type when its first
    /// piece is `piece`. Both engines stop at the same candidate.
    #[error("revenue overflows at sub-length {sub_length} (first piece {piece})")]
    ProfitOverflow { sub_length: usize, piece: usize },
}

/// Errors from [`crate::batching::optimize_batches`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    #[error("printer must accept at least one item per batch")]
    ZeroCapacity,

    #[error("printer volume limit must be positive, got {0}")]
    NonPositiveVolume(f64),

    #[error("job {id} must have a positive volume")]
    NonPositiveJobVolume { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_rule() {
        let e = InvalidInputError::LengthMismatch {
            length: 4,
            prices: 3,
        };
        assert_eq!(e.to_string(), "price table has 3 entries but rod length is 4");
        let e = InvalidInputError::NonPositivePrice { piece: 2 };
        assert!(e.to_string().contains("piece length 2"));
        assert_eq!(
            InvalidInputError::NonPositiveLength { length: -1 }.to_string(),
            "rod length must be positive, got -1"
        );
    }
}
