//! Assorted helpers over cut sequences.

use crate::traits::Price;

/// Total length covered by a cut sequence.
#[inline]
pub fn pieces_total(cuts: &[usize]) -> usize {
    cuts.iter().sum()
}

/// Revenue of selling the pieces in `cuts`, accumulated left to right from
/// zero.
///
/// Returns `None` if a piece is zero-length, has no entry in `prices`, or the
/// total overflows the price type.
pub fn revenue_of<P: Price>(cuts: &[usize], prices: &[P]) -> Option<P> {
    cuts.iter().try_fold(P::ZERO, |acc, &piece| {
        let price = *prices.get(piece.checked_sub(1)?)?;
        acc.checked_add(price)
    })
}
