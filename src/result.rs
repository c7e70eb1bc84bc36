//! Result records produced by the engines.

use crate::traits::Price;
use crate::utils::{pieces_total, revenue_of};

/// Best known answer for one sub-length, shared by both engines.
///
/// `cuts` is the append order of the recurrence: the cuts of the optimal
/// remainder followed by the first piece chosen at this level.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fragment<P> {
    pub(crate) profit: P,
    pub(crate) cuts: Vec<usize>,
}

impl<P: Price> Fragment<P> {
    /// Answer for the empty rod.
    pub(crate) fn empty() -> Self {
        Self {
            profit: P::ZERO,
            cuts: Vec::new(),
        }
    }

    /// Extend the optimal answer for the remainder with `piece`.
    pub(crate) fn extend(rest: &Fragment<P>, piece: usize, profit: P) -> Self {
        let mut cuts = Vec::with_capacity(rest.cuts.len() + 1);
        cuts.extend_from_slice(&rest.cuts);
        cuts.push(piece);
        Self { profit, cuts }
    }
}

/// Maximum revenue and one cut sequence that achieves it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<P> {
    /// Best achievable revenue.
    pub max_profit: P,
    /// Piece lengths in the order the recurrence appended them.
    pub cuts: Vec<usize>,
    /// Number of cut points, `cuts.len() - 1`. Equals `-1` when `cuts` is
    /// empty.
    pub cut_count: i64,
}

impl<P: Price> SolveResult<P> {
    /// Build a result, deriving `cut_count` from `cuts`.
    pub fn new(max_profit: P, cuts: Vec<usize>) -> Self {
        let cut_count = cuts.len() as i64 - 1;
        Self {
            max_profit,
            cuts,
            cut_count,
        }
    }

    pub(crate) fn from_fragment(fragment: Fragment<P>) -> Self {
        Self::new(fragment.profit, fragment.cuts)
    }

    /// Number of pieces the rod is sold as.
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }

    /// Check the sum invariants against the input the result was solved for:
    /// the pieces add up to `length` and their prices add up to `max_profit`.
    ///
    /// Prices are summed in cut order, the same order the engines accumulate
    /// them, so the comparison is exact for floating-point tables too.
    pub fn is_consistent_with(&self, length: usize, prices: &[P]) -> bool {
        pieces_total(&self.cuts) == length
            && revenue_of(&self.cuts, prices).is_some_and(|r| r == self.max_profit)
    }
}
