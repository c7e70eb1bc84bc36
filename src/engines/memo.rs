//! Top-down engine: recursive evaluation with a per-call memo.
//!
//! `f(0) = 0`; `f(n) = max over i in 1..=min(n, |prices|) of price[i] + f(n - i)`.
//! Candidates are scanned with increasing first piece `i` and only a strictly
//! better profit replaces the current best, so among equally profitable first
//! pieces the smallest one wins.

use crate::error::InvalidInputError;
use crate::result::{Fragment, SolveResult};
use crate::traits::{Price, RodSolver};
use crate::validate::validate;

/// Memoized recursive solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoSolver;

impl RodSolver for MemoSolver {
    fn name(&self) -> &'static str {
        "memo"
    }

    fn solve<P: Price>(
        &self,
        length: i64,
        prices: &[P],
    ) -> Result<SolveResult<P>, InvalidInputError> {
        solve_memo(length, prices)
    }
}

/// Solve with top-down memoized recursion.
///
/// Recursion depth equals the rod length, so very long rods can exhaust the
/// thread stack; [`crate::solve_table`] has no such limit.
///
/// Integer revenues that do not fit the price type are reported as
/// [`InvalidInputError::ProfitOverflow`].
///
/// ```
/// let r = rod_cut::solve_memo(3, &[1u32, 3, 8]).unwrap();
/// assert_eq!(r.max_profit, 8);
/// assert_eq!(r.cuts, vec![3]);
/// assert_eq!(r.cut_count, 0);
/// ```
pub fn solve_memo<P: Price>(
    length: i64,
    prices: &[P],
) -> Result<SolveResult<P>, InvalidInputError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("solve_memo", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if let Err(err) = validate(length, prices) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%err, "rejected input");
        return Err(err);
    }

    let n = prices.len();
    let mut memo = Memo::new(n);
    best(n, prices, &mut memo)?;
    Ok(SolveResult::from_fragment(memo.take(n)))
}

/// Write-once table from sub-length to its optimal fragment.
struct Memo<P> {
    slots: Vec<Option<Fragment<P>>>,
}

impl<P: Price> Memo<P> {
    fn new(length: usize) -> Self {
        let mut slots = vec![None; length + 1];
        slots[0] = Some(Fragment::empty());
        Self { slots }
    }

    #[inline]
    fn get(&self, n: usize) -> Option<&Fragment<P>> {
        self.slots[n].as_ref()
    }

    fn insert(&mut self, n: usize, fragment: Fragment<P>) {
        debug_assert!(self.slots[n].is_none(), "memo slot {n} written twice");
        self.slots[n] = Some(fragment);
    }

    fn take(mut self, n: usize) -> Fragment<P> {
        self.slots[n].take().unwrap_or_else(Fragment::empty)
    }
}

/// Optimal profit for sub-length `n`, filling `memo` on the way.
///
/// Sub-lengths complete in increasing order, the same order the tabulated
/// engine fills its table, so an overflow surfaces at the same candidate.
fn best<P: Price>(n: usize, prices: &[P], memo: &mut Memo<P>) -> Result<P, InvalidInputError> {
    if let Some(done) = memo.get(n) {
        return Ok(done.profit);
    }

    let mut best_profit = P::ZERO;
    let mut best_piece = 0;
    for piece in 1..=n.min(prices.len()) {
        let candidate = best(n - piece, prices, memo)?
            .checked_add(prices[piece - 1])
            .ok_or(InvalidInputError::ProfitOverflow {
                sub_length: n,
                piece,
            })?;
        if candidate > best_profit {
            #[cfg(feature = "tracing")]
            tracing::trace!(sub_length = n, piece, profit = ?candidate, "improved");
            best_profit = candidate;
            best_piece = piece;
        }
    }

    let fragment = match memo.get(n - best_piece) {
        Some(rest) if best_piece > 0 => Fragment::extend(rest, best_piece, best_profit),
        _ => Fragment::empty(),
    };
    memo.insert(n, fragment);
    Ok(best_profit)
}
