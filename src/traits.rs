//! Core trait definitions shared by the solving engines.
//!
//! - [`Price`] abstracts over the numeric type of a price table so the same
//!   recurrence runs on integer and floating-point revenues.
//! - [`RodSolver`] is the seam both evaluation orders plug into; callers and
//!   tests can stay generic over which engine produced a result.

use std::fmt::Debug;
use std::ops::Add;

use crate::error::InvalidInputError;
use crate::result::SolveResult;

/// Numeric revenue type usable in a price table.
///
/// Only addition and ordering are required by the recurrence. `ZERO` is the
/// profit of the empty rod and the threshold a valid price must exceed.
pub trait Price: Copy + PartialOrd + Add<Output = Self> + Debug + Send + Sync {
    const ZERO: Self;

    /// Addition that reports overflow instead of wrapping. Floating-point
    /// types never overflow here; they saturate to infinity.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// True when the value is strictly greater than [`Price::ZERO`].
    ///
    /// Written as a positive comparison so that unordered values (NaN) are
    /// not positive.
    #[inline]
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }
}

macro_rules! impl_int_price {
    ($($t:ty),* $(,)?) => {
        $(impl Price for $t {
            const ZERO: Self = 0;

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
        })*
    };
}

impl_int_price!(u32, u64, i32, i64);

impl Price for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// A rod-cutting engine.
///
/// Implementations must validate `(length, prices)` with
/// [`crate::validate::validate`] before doing any work and must implement the
/// shared recurrence with the strict-improvement tie-break, so that every
/// implementation returns the same [`SolveResult`] for the same input.
pub trait RodSolver {
    /// Short identifier used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Solve for the maximum revenue and one optimal cut sequence.
    fn solve<P: Price>(
        &self,
        length: i64,
        prices: &[P],
    ) -> Result<SolveResult<P>, InvalidInputError>;
}

#[cfg(test)]
mod tests {
    use super::Price;

    #[test]
    fn positivity_matches_strict_comparison() {
        assert!(1u32.is_positive());
        assert!(!0u64.is_positive());
        assert!(!(-3i32).is_positive());
        assert!(Price::is_positive(0.5f64));
        assert!(!Price::is_positive(-0.0f64));
    }

    #[test]
    fn integer_addition_reports_overflow() {
        assert_eq!(Price::checked_add(u32::MAX, 1), None);
        assert_eq!(Price::checked_add(i64::MAX, 1), None);
        assert_eq!(Price::checked_add(2u64, 3), Some(5));
        assert_eq!(Price::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
    }

    #[test]
    fn nan_is_not_positive() {
        assert!(!Price::is_positive(f64::NAN));
    }
}
