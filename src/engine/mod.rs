//! The worklist solver that drives the elimination rules.
//!
//! This is a pure propagation engine. It never guesses: candidates are
//! only ever removed, so every digit it commits is forced by the givens.
//! The price is that hard puzzles can stall, which the engine reports as
//! [`Outcome::Exhausted`] after a fixed number of worklist dequeues.

mod rules;

pub use self::rules::Rule;

use std::collections::VecDeque;

use log::{debug, trace};

use crate::board::{Cell, Grid};

/// Default number of worklist dequeues before the solver gives up.
pub const DEFAULT_BUDGET: u32 = 5000;

/// How a solving run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The worklist drained: every cell is committed to a digit.
    Converged,
    /// The dequeue budget ran out before the grid was solved.
    Exhausted,
}

/// Drives elimination rules over a [`Grid`] until it is solved or the
/// dequeue budget runs out.
///
/// Open cells wait in a FIFO worklist seeded in row-major order. Each
/// dequeue costs one unit of budget and runs every requested rule against
/// the cell's row, column and block, in that order. A cell that is still
/// open afterwards reenters the queue at the tail. The worklist can
/// therefore only drain by solving every cell: [`Outcome::Converged`]
/// implies a full solution, and a grid the rules cannot improve spins until
/// the budget ends the run with [`Outcome::Exhausted`].
#[derive(Debug, Clone)]
pub struct EliminationSolver {
    grid: Grid,
    queue: VecDeque<Cell>,
    budget: u32,
}

impl EliminationSolver {
    /// Creates a solver with the default dequeue budget.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_budget(grid, DEFAULT_BUDGET)
    }

    /// Creates a solver that gives up after `budget` dequeues.
    pub fn with_budget(grid: Grid, budget: u32) -> Self {
        let queue = Cell::all()
            .filter(|&cell| !grid.cells[cell].is_solved())
            .collect();
        EliminationSolver { grid, queue, budget }
    }

    /// Runs `rules` until the grid is solved or the budget is spent and
    /// returns the final grid together with the outcome.
    ///
    /// The rules run in the order given, each against the row, the column
    /// and the block of the dequeued cell. An empty slice makes every
    /// dequeue a no-op, so a grid with open cells then always exhausts.
    pub fn solve(mut self, rules: &[Rule]) -> (Grid, Outcome) {
        debug!("worklist seeded with {} open cells", self.queue.len());

        let mut used = 0;
        while used < self.budget {
            let cell = match self.queue.pop_front() {
                Some(cell) => cell,
                None => break,
            };
            used += 1;

            self.visit(cell, rules);

            if self.grid.cells[cell].is_solved() {
                trace!(
                    "r{}c{} solved after {} dequeues",
                    cell.row().get() + 1,
                    cell.col().get() + 1,
                    used,
                );
            } else {
                self.queue.push_back(cell);
            }
        }

        let outcome = match self.queue.is_empty() {
            true => Outcome::Converged,
            false => Outcome::Exhausted,
        };
        debug!(
            "{:?} after {} dequeues, {} cells solved",
            outcome,
            used,
            self.grid.n_solved(),
        );
        (self.grid, outcome)
    }

    fn visit(&mut self, cell: Cell, rules: &[Rule]) {
        for &rule in rules {
            for &unit in cell.units().iter() {
                // the cell may have been solved by an earlier application
                // or by a pass over one of its peers
                if self.grid.cells[cell].is_solved() {
                    return;
                }
                rule.apply(&mut self.grid.cells, cell, unit);
            }
        }
    }
}

impl Grid {
    /// Solves the grid in place with all rules and the default budget.
    ///
    /// This is a convenience interface. Use an [`EliminationSolver`] to
    /// pick the rules or the budget.
    pub fn solve(&mut self) -> Outcome {
        let (grid, outcome) = EliminationSolver::from_grid(self.clone()).solve(Rule::ALL);
        *self = grid;
        outcome
    }
}
