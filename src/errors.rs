#[cfg(doc)]
use crate::Grid;

/// Error for [`Grid::from_givens`]
#[derive(Debug, thiserror::Error)]
pub enum InvalidGivens {
    /// Not exactly 81 cell values
    #[error("expected 81 cell values, found {0}")]
    WrongLength(usize),
    /// A value other than -1 or 1..=9
    #[error("cell {cell} holds {value}, allowed are -1 for an open cell and 1..=9")]
    OutOfRange {
        /// Row-major index of the offending cell
        cell: usize,
        /// The rejected value
        value: i32,
    },
}

/// Error for [`Grid::from_reader`] and [`Grid::from_str_line`]
#[derive(Debug, thiserror::Error)]
pub enum ParseGridError {
    /// Reading the input failed
    #[error("could not read the puzzle")]
    Io(#[from] std::io::Error),
    /// A token that is not an integer
    #[error("cell {index}: `{token}` is not an integer")]
    InvalidToken {
        /// Row-major index of the offending token
        index: usize,
        /// The rejected token
        token: String,
    },
    /// A character that is neither a digit nor a blank marker
    #[error("cell {index}: unrecognized character {found:?}")]
    InvalidCharacter {
        /// Index of the offending character
        index: usize,
        /// The rejected character
        found: char,
    },
    /// The cell values were rejected
    #[error(transparent)]
    Givens(#[from] InvalidGivens),
}
