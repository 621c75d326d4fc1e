use std::convert::TryFrom;
use std::fmt;
use std::io::BufRead;

use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit};
use crate::errors::{InvalidGivens, ParseGridError};
use crate::helper::CellArray;

/// A 9x9 sudoku grid holding the per-cell solving state.
///
/// Each cell is either committed to a digit or carries the set of digits
/// not yet ruled out for it. Open cells start with all nine candidates;
/// given cells are committed from the start. Equality compares the full
/// state, candidate sets included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub(crate) cells: CellArray<CellState>,
}

impl Grid {
    /// Builds a grid from 81 cell values in row-major order.
    ///
    /// `-1` marks an open cell, `1..=9` a given digit. Anything else is
    /// rejected, including `0`.
    pub fn from_givens(givens: &[i32]) -> Result<Grid, InvalidGivens> {
        if givens.len() != 81 {
            return Err(InvalidGivens::WrongLength(givens.len()));
        }
        let mut cells = CellArray([CellState::Candidates(Set::ALL); 81]);
        for (cell, &value) in Cell::all().zip(givens) {
            if value == -1 {
                continue;
            }
            let digit = u8::try_from(value)
                .ok()
                .and_then(Digit::new_checked)
                .ok_or(InvalidGivens::OutOfRange {
                    cell: cell.as_index(),
                    value,
                })?;
            cells[cell] = CellState::Solved(digit);
        }
        Ok(Grid { cells })
    }

    /// Reads a grid from whitespace separated cell values.
    ///
    /// Expects exactly 81 integer tokens, split across any number of lines.
    /// The values follow the [`from_givens`](Grid::from_givens) convention.
    pub fn from_reader(reader: impl BufRead) -> Result<Grid, ParseGridError> {
        let mut givens = Vec::with_capacity(81);
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                match token.parse::<i32>() {
                    Ok(value) => givens.push(value),
                    Err(_) => {
                        return Err(ParseGridError::InvalidToken {
                            index: givens.len(),
                            token: token.to_owned(),
                        });
                    }
                }
            }
        }
        Ok(Grid::from_givens(&givens)?)
    }

    /// Builds a grid from the common 81 character line format.
    ///
    /// `'1'..='9'` are givens, `'.'`, `'_'` and `'0'` mark open cells.
    pub fn from_str_line(s: &str) -> Result<Grid, ParseGridError> {
        let mut givens = Vec::with_capacity(81);
        for (index, ch) in s.trim().chars().enumerate() {
            match ch {
                '.' | '_' | '0' => givens.push(-1),
                '1'..='9' => givens.push(i32::from(ch as u8 - b'0')),
                _ => return Err(ParseGridError::InvalidCharacter { index, found: ch }),
            }
        }
        Ok(Grid::from_givens(&givens)?)
    }

    /// The state of a single cell.
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    /// Checks whether every cell is committed to a digit.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(CellState::is_solved)
    }

    /// Number of solved cells.
    pub fn n_solved(&self) -> u8 {
        self.cells.iter().filter(|state| state.is_solved()).count() as u8
    }
}

// Solved cells print as their digit right justified in a two character
// column, open cells as `_`, each followed by a single space. Nine cells
// per line, every line newline terminated.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in Cell::all() {
            match self.cells[cell].solved_digit() {
                Some(digit) => write!(f, "{:>2} ", digit.get())?,
                None => write!(f, " _ ")?,
            }
            if cell.col().get() == 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let too_short = vec![-1; 80];
        match Grid::from_givens(&too_short) {
            Err(InvalidGivens::WrongLength(len)) => assert_eq!(len, 80),
            other => panic!("unexpected result: {:?}", other),
        }
        let too_long = vec![-1; 82];
        match Grid::from_givens(&too_long) {
            Err(InvalidGivens::WrongLength(len)) => assert_eq!(len, 82),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        for &bad in &[0, 10, -2, 127, 600] {
            let mut givens = vec![-1; 81];
            givens[17] = bad;
            match Grid::from_givens(&givens) {
                Err(InvalidGivens::OutOfRange { cell, value }) => {
                    assert_eq!(cell, 17);
                    assert_eq!(value, bad);
                }
                other => panic!("{} not rejected: {:?}", bad, other),
            }
        }
    }

    #[test]
    fn open_cells_start_with_all_candidates() {
        let grid = Grid::from_givens(&[-1; 81]).unwrap();
        for cell in Cell::all() {
            assert_eq!(grid.state(cell), CellState::Candidates(Set::ALL));
        }
        assert_eq!(grid.n_solved(), 0);
        assert!(!grid.is_solved());
    }

    #[test]
    fn givens_are_committed() {
        let mut givens = vec![-1; 81];
        givens[0] = 5;
        givens[80] = 9;
        let grid = Grid::from_givens(&givens).unwrap();
        assert_eq!(grid.state(Cell::new(0)), CellState::Solved(Digit::new(5)));
        assert_eq!(grid.state(Cell::new(80)), CellState::Solved(Digit::new(9)));
        assert_eq!(grid.n_solved(), 2);
    }

    #[test]
    fn reader_accepts_tokens_across_lines() {
        let mut text = String::new();
        for i in 0..81 {
            text.push_str(if i % 2 == 0 { "-1" } else { "7" });
            text.push(if i % 9 == 8 { '\n' } else { ' ' });
        }
        let grid = Grid::from_reader(text.as_bytes()).unwrap();
        assert_eq!(grid.state(Cell::new(1)), CellState::Solved(Digit::new(7)));
        assert_eq!(grid.state(Cell::new(2)), CellState::Candidates(Set::ALL));
        assert_eq!(grid.n_solved(), 40);
    }

    #[test]
    fn reader_rejects_non_integer_tokens() {
        let text = "1 2 3 four 5";
        match Grid::from_reader(text.as_bytes()) {
            Err(ParseGridError::InvalidToken { index, token }) => {
                assert_eq!(index, 3);
                assert_eq!(token, "four");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reader_requires_exactly_81_tokens() {
        let text = "-1 ".repeat(82);
        match Grid::from_reader(text.as_bytes()) {
            Err(ParseGridError::Givens(InvalidGivens::WrongLength(len))) => assert_eq!(len, 82),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn line_format_roundtrip() {
        let line =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let grid = Grid::from_str_line(line).unwrap();
        assert_eq!(grid.n_solved(), 32);
        assert_eq!(grid.state(Cell::new(2)), CellState::Solved(Digit::new(3)));
        // '0' and '_' also mark open cells
        let same = Grid::from_str_line(&line.replace('.', "0")).unwrap();
        assert_eq!(grid, same);
    }

    #[test]
    fn line_format_rejects_garbage() {
        let mut line = ".".repeat(81);
        line.replace_range(5..6, "x");
        match Grid::from_str_line(&line) {
            Err(ParseGridError::InvalidCharacter { index, found }) => {
                assert_eq!(index, 5);
                assert_eq!(found, 'x');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn display_uses_fixed_width_fields() {
        let mut line = String::from("5");
        line.push_str(&".".repeat(80));
        let grid = Grid::from_str_line(&line).unwrap();
        let printed = format!("{}", grid);

        let open_row = " _  _  _  _  _  _  _  _  _ \n";
        let mut expected = String::from(" 5  _  _  _  _  _  _  _  _ \n");
        for _ in 0..8 {
            expected.push_str(open_row);
        }
        assert_eq!(printed, expected);
    }
}
