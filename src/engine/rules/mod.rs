pub(crate) mod naked_subsets;
pub(crate) mod peer_elimination;

use crate::board::{Cell, CellState, Unit};
use crate::helper::CellArray;

/// The rules that can be used to eliminate candidates.
///
/// This can be used with [`EliminationSolver::solve`](crate::EliminationSolver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Removes the digits of solved cells in the same unit from the
    /// candidates of the cell under consideration.
    PeerElimination,
    /// Finds cells of a unit that are confined to the candidates of the
    /// cell under consideration. When as many cells are confined as there
    /// are candidates, those digits are removed from the rest of the unit.
    NakedSubsets,
}

impl Rule {
    /// All rules, in the order a full solving pass applies them.
    pub const ALL: &'static [Rule] = &[Rule::PeerElimination, Rule::NakedSubsets];

    pub(crate) fn apply(self, cells: &mut CellArray<CellState>, cell: Cell, unit: Unit) {
        match self {
            Rule::PeerElimination => peer_elimination::eliminate_solved_peers(cells, cell, unit),
            Rule::NakedSubsets => naked_subsets::eliminate_naked_subset(cells, cell, unit),
        }
    }
}
