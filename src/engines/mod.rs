//! The two evaluation orders of the rod-cutting recurrence.
//!
//! - [`memo`]  : top-down recursion with a per-call memo.
//! - [`table`] : bottom-up tabulation.
//!
//! Both return identical results for every valid input; [`cross_check`]
//! runs them side by side and reports whether they agree.

pub mod memo;
pub mod table;

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;
use crate::result::SolveResult;
use crate::traits::{Price, RodSolver};
use crate::validate::validate;
use memo::{solve_memo, MemoSolver};
use table::{solve_table, TableSolver};

/// Runtime selection of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Memo,
    Table,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Memo, EngineKind::Table];

    pub fn solve<P: Price>(
        self,
        length: i64,
        prices: &[P],
    ) -> Result<SolveResult<P>, InvalidInputError> {
        match self {
            EngineKind::Memo => MemoSolver.solve(length, prices),
            EngineKind::Table => TableSolver.solve(length, prices),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Memo => MemoSolver.name(),
            EngineKind::Table => TableSolver.name(),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "memo" => Ok(EngineKind::Memo),
            "table" => Ok(EngineKind::Table),
            other => Err(format!("unknown engine '{other}'")),
        }
    }
}

/// Results of both engines for the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheck<P> {
    pub memo: SolveResult<P>,
    pub table: SolveResult<P>,
}

impl<P: Price> CrossCheck<P> {
    /// True when profit, cuts and cut count all match.
    pub fn agree(&self) -> bool {
        self.memo == self.table
    }

    /// The shared result if the engines agree.
    pub fn into_agreed(self) -> Option<SolveResult<P>> {
        if self.agree() {
            Some(self.memo)
        } else {
            None
        }
    }
}

/// Run both engines on `(length, prices)`.
///
/// Input is validated once up front; with the `parallel` feature the engines
/// run on separate rayon workers.
pub fn cross_check<P: Price>(
    length: i64,
    prices: &[P],
) -> Result<CrossCheck<P>, InvalidInputError> {
    validate(length, prices)?;

    #[cfg(feature = "parallel")]
    let (memo, table) = rayon::join(
        || solve_memo(length, prices),
        || solve_table(length, prices),
    );
    #[cfg(not(feature = "parallel"))]
    let (memo, table) = (solve_memo(length, prices), solve_table(length, prices));

    let check = CrossCheck {
        memo: memo?,
        table: table?,
    };
    #[cfg(feature = "tracing")]
    if !check.agree() {
        tracing::warn!(length, memo = ?check.memo, table = ?check.table, "engines disagree");
    }
    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_kind_round_trips_through_names() {
        for kind in EngineKind::ALL {
            assert_eq!(kind.name().parse::<EngineKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!("greedy".parse::<EngineKind>().is_err());
    }

    #[test]
    fn kinds_dispatch_to_matching_engine() {
        let prices = [2u32, 5, 7, 8, 10];
        assert_eq!(
            EngineKind::Memo.solve(5, &prices),
            solve_memo(5, &prices)
        );
        assert_eq!(
            EngineKind::Table.solve(5, &prices),
            solve_table(5, &prices)
        );
    }

    #[test]
    fn cross_check_agrees_on_textbook_case() {
        let check = cross_check(5, &[2u32, 5, 7, 8, 10]).unwrap();
        assert!(check.agree());
        let agreed = check.into_agreed().unwrap();
        assert_eq!(agreed.max_profit, 12);
    }

    #[test]
    fn cross_check_validates_first() {
        assert_eq!(
            cross_check::<u32>(0, &[]),
            Err(InvalidInputError::NonPositiveLength { length: 0 })
        );
    }
}
