//! Input gate run by every engine before solving.

use crate::error::InvalidInputError;
use crate::traits::Price;

/// Check that `prices` is a usable price table for a rod of `length`.
///
/// Rules, in the order they are checked:
/// 1. `length > 0`
/// 2. `prices` is non-empty
/// 3. `prices.len() == length`
/// 4. every price is strictly positive
///
/// A shorter table would under-price the rod and a longer one is ambiguous,
/// so both are rejected rather than truncated.
pub fn validate<P: Price>(length: i64, prices: &[P]) -> Result<(), InvalidInputError> {
    if length <= 0 {
        return Err(InvalidInputError::NonPositiveLength { length });
    }
    if prices.is_empty() {
        return Err(InvalidInputError::EmptyPrices);
    }
    if usize::try_from(length).ok() != Some(prices.len()) {
        return Err(InvalidInputError::LengthMismatch {
            length,
            prices: prices.len(),
        });
    }
    if let Some(idx) = prices.iter().position(|p| !p.is_positive()) {
        return Err(InvalidInputError::NonPositivePrice { piece: idx + 1 });
    }
    Ok(())
}
