//! Bottom-up engine: fills dense profit/cuts tables in increasing sub-length.
//!
//! Same recurrence and tie-break as [`super::memo`]; each entry is final
//! before any longer sub-length reads it.

use crate::error::InvalidInputError;
use crate::result::SolveResult;
use crate::traits::{Price, RodSolver};
use crate::validate::validate;

/// Tabulated iterative solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableSolver;

impl RodSolver for TableSolver {
    fn name(&self) -> &'static str {
        "table"
    }

    fn solve<P: Price>(
        &self,
        length: i64,
        prices: &[P],
    ) -> Result<SolveResult<P>, InvalidInputError> {
        solve_table(length, prices)
    }
}

/// Solve with bottom-up tabulation.
///
/// ```
/// let r = rod_cut::solve_table(4, &[3u32, 5, 6, 7]).unwrap();
/// assert_eq!(r.max_profit, 12);
/// assert_eq!(r.cuts.iter().sum::<usize>(), 4);
/// ```
pub fn solve_table<P: Price>(
    length: i64,
    prices: &[P],
) -> Result<SolveResult<P>, InvalidInputError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("solve_table", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if let Err(err) = validate(length, prices) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%err, "rejected input");
        return Err(err);
    }

    let n = prices.len();
    let mut profit = vec![P::ZERO; n + 1];
    let mut cuts: Vec<Vec<usize>> = vec![Vec::new(); n + 1];

    for m in 1..=n {
        let mut best_piece = 0;
        for piece in 1..=m.min(prices.len()) {
            let candidate = profit[m - piece]
                .checked_add(prices[piece - 1])
                .ok_or(InvalidInputError::ProfitOverflow {
                    sub_length: m,
                    piece,
                })?;
            if candidate > profit[m] {
                #[cfg(feature = "tracing")]
                tracing::trace!(sub_length = m, piece, profit = ?candidate, "improved");
                profit[m] = candidate;
                best_piece = piece;
            }
        }
        if best_piece > 0 {
            let mut row = Vec::with_capacity(cuts[m - best_piece].len() + 1);
            row.extend_from_slice(&cuts[m - best_piece]);
            row.push(best_piece);
            cuts[m] = row;
        }
    }

    let best_cuts = std::mem::take(&mut cuts[n]);
    Ok(SolveResult::new(profit[n], best_cuts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selling_whole_beats_cutting() {
        let r = solve_table(3, &[1u32, 3, 8]).unwrap();
        assert_eq!(r, SolveResult::new(8, vec![3]));
    }

    #[test]
    fn unit_pieces_win() {
        let r = solve_table(4, &[3i64, 5, 6, 7]).unwrap();
        assert_eq!(r.max_profit, 12);
        assert_eq!(r.cuts, vec![1, 1, 1, 1]);
        assert_eq!(r.cut_count, 3);
    }

    #[test]
    fn float_prices() {
        let r = solve_table(2, &[1.5f64, 2.5]).unwrap();
        assert_eq!(r.max_profit, 3.0);
        assert_eq!(r.cuts, vec![1, 1]);
    }

    #[test]
    fn overflowing_revenue_is_an_error() {
        assert_eq!(
            solve_table(2, &[i64::MAX, 1]),
            Err(InvalidInputError::ProfitOverflow {
                sub_length: 2,
                piece: 1
            })
        );
    }

    #[test]
    fn rejects_non_positive_price() {
        assert_eq!(
            solve_table(3, &[1i32, 2, 0]),
            Err(InvalidInputError::NonPositivePrice { piece: 3 })
        );
    }
}
