//! Types for cells, digits and other things on a sudoku board
mod cell_state;
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::{
    positions::*,
};

pub use self::{
    cell_state::CellState,
    digit::Digit,
    grid::Grid,
    positions::{Cell, Position, Unit},
};
