#![warn(missing_docs)]
//! A sudoku solver built on pure candidate elimination.
//!
//! ## Overview
//!
//! Every open cell tracks the set of digits that can still be entered in
//! it. A worklist of open cells is drained cell by cell; two rules remove
//! candidates: the digits of solved cells in the same row, column or block,
//! and the digits of naked subsets the cell is part of. A cell down to one
//! candidate commits to it. There is no guessing and no backtracking, so
//! every committed digit is forced by the givens. Grids this cannot crack
//! are reported as exhausted rather than solved wrongly.
//!
//! ## Example
//!
//! ```
//! use deduku::{Grid, Outcome};
//!
//! let puzzle =
//!     "534.7...267.....4..9....5....97.14...2..5.7....3924....6...72...8..196353.528.17.";
//!
//! // Grids can be created from the 81 character line format or from
//! // 81 whitespace separated integers (-1 for open cells).
//! let mut grid = Grid::from_str_line(puzzle).unwrap();
//!
//! let outcome = grid.solve();
//! assert_eq!(outcome, Outcome::Converged);
//! assert!(grid.is_solved());
//!
//! // prints the grid as 9 rows of fixed width cells
//! println!("{}", grid);
//! ```

#[macro_use]
extern crate crunchy;

pub mod bitset;
pub mod board;
pub mod engine;
mod errors;
mod helper;

pub use crate::bitset::Set;
pub use crate::board::{Cell, CellState, Digit, Grid, Position, Unit};
pub use crate::engine::{EliminationSolver, Outcome, Rule, DEFAULT_BUDGET};
pub use crate::errors::{InvalidGivens, ParseGridError};
