use log::trace;

use crate::bitset::Set;
use crate::board::{Cell, CellState, Position, Unit};
use crate::helper::CellArray;

/// Naked subset hunt anchored at the candidates of `cell`.
///
/// Every slot of `unit` whose candidates are confined to the anchor set is
/// part of the subset. The anchor's own slot always is. When exactly as
/// many slots are confined as the set has digits, those digits cannot
/// appear anywhere else in the unit and are removed from all other slots.
///
/// A solved slot only counts as confined while its digit is in the anchor
/// set, in which case it narrows the subset like any other member.
pub(crate) fn eliminate_naked_subset(cells: &mut CellArray<CellState>, cell: Cell, unit: Unit) {
    let subset_digits = cells[cell].candidates();
    let members = unit.cells();

    let mut confined = Set::<Position>::NONE;
    for pos in Position::all() {
        if subset_digits.contains(cells[members[pos.as_index()]].candidates()) {
            confined |= pos;
        }
    }

    if confined.len() != subset_digits.len() {
        return;
    }

    trace!(
        "naked subset of {} digits in unit {}",
        subset_digits.len(),
        unit.get(),
    );

    for pos in Position::all() {
        if confined.contains(pos) {
            continue;
        }
        let target = members[pos.as_index()];
        for digit in subset_digits {
            cells[target].eliminate(digit);
        }
    }
}
