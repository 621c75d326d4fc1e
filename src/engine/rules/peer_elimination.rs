use crate::board::{Cell, CellState, Unit};
use crate::helper::CellArray;

/// Removes the digit of every solved cell in `unit` from the candidates of
/// `cell`.
///
/// The scan covers all nine slots of the unit. The slot holding `cell`
/// itself is never solved when this runs and contributes nothing.
pub(crate) fn eliminate_solved_peers(cells: &mut CellArray<CellState>, cell: Cell, unit: Unit) {
    let members = unit.cells();
    unroll! {
        for slot in 0..9 {
            let peer = cells[members[slot]];
            if let CellState::Solved(digit) = peer {
                cells[cell].eliminate(digit);
            }
        }
    }
}
