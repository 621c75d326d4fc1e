use crate::bitset::Set;
use crate::board::Digit;

/// The solving state of a single cell, either a committed digit or the
/// candidates still open for it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CellState {
    /// The cell is committed to this digit.
    Solved(Digit),
    /// The digits that can still be entered in this cell.
    ///
    /// Grids built through [`Grid`](crate::Grid) constructors hold at least
    /// two candidates here: a set that shrinks to one digit is committed in
    /// the same step.
    Candidates(Set<Digit>),
}

impl CellState {
    /// Checks whether the cell is down to a single possibility.
    pub fn is_solved(&self) -> bool {
        match self {
            CellState::Solved(_) => true,
            CellState::Candidates(_) => false,
        }
    }

    /// The digit the cell is committed to, if any.
    pub fn solved_digit(&self) -> Option<Digit> {
        match *self {
            CellState::Solved(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// The candidate set of the cell. For a solved cell this is the single
    /// committed digit.
    pub fn candidates(&self) -> Set<Digit> {
        match *self {
            CellState::Solved(digit) => digit.as_set(),
            CellState::Candidates(cands) => cands,
        }
    }

    /// Removes `digit` from the cell's candidates.
    ///
    /// Does nothing on a solved cell or when the digit is not a candidate,
    /// so repeated application is harmless. When the removal leaves a single
    /// candidate, the cell is committed to it. Returns `true` iff the
    /// candidate set shrank.
    pub fn eliminate(&mut self, digit: Digit) -> bool {
        let cands = match self {
            CellState::Solved(_) => return false,
            CellState::Candidates(cands) => cands,
        };
        if !cands.contains(digit) {
            return false;
        }
        cands.remove(digit);
        debug_assert!(!cands.is_empty(), "cell stripped of all candidates");
        if let Some(last) = cands.unique() {
            *self = CellState::Solved(last);
        }
        true
    }
}
