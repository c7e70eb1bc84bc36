//! Rod-cutting revenue maximization.
//!
//! Given a rod of integer length `N` and a price for every piece length
//! `1..=N`, find the maximum revenue obtainable by cutting the rod into
//! integer pieces, together with one cut sequence that achieves it.
//!
//! ## Core idea
//! The problem has optimal substructure: the best answer for length `n` is a
//! first piece `i` plus the best answer for `n - i`. This crate evaluates that
//! recurrence two ways:
//! 1. [`solve_memo`] recurses top-down and caches each sub-length.
//! 2. [`solve_table`] fills a dense table bottom-up.
//!
//! Both use the same tie-break (first pieces scanned in increasing length,
//! replaced only on strictly greater profit) and therefore return identical
//! results. [`cross_check`] runs both and compares them.
//!
//! ## Quick start
//! ```
//! use rod_cut::{solve_memo, solve_table};
//!
//! let prices = [2u32, 5, 7, 8, 10];
//! let memo = solve_memo(5, &prices).unwrap();
//! let table = solve_table(5, &prices).unwrap();
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(memo, table);
//! assert_eq!(memo.cuts.iter().sum::<usize>(), 5);
//! ```
//!
//! Invalid input is reported as an [`InvalidInputError`] before any solving
//! work happens:
//! ```
//! use rod_cut::{solve_table, InvalidInputError};
//!
//! let err = solve_table(3, &[1u32, 2]).unwrap_err();
//! assert_eq!(err, InvalidInputError::LengthMismatch { length: 3, prices: 2 });
//! ```
//!
//! The [`batching`] module holds an unrelated greedy planner for grouping
//! print jobs into capacity-bounded batches.

pub mod batching;
pub mod engines;
pub mod error;
pub mod result;
pub mod traits;
pub mod utils;
pub mod validate;

pub use crate::engines::memo::{solve_memo, MemoSolver};
pub use crate::engines::table::{solve_table, TableSolver};
pub use crate::engines::{cross_check, CrossCheck, EngineKind};
pub use crate::error::{BatchError, InvalidInputError};
pub use crate::result::SolveResult;
pub use crate::traits::{Price, RodSolver};
pub use crate::validate::validate;
