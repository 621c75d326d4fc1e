use std::io;
use std::process;

use deduku::{EliminationSolver, Grid, Outcome, Rule};

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let grid = match Grid::from_reader(stdin.lock()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let (grid, outcome) = EliminationSolver::from_grid(grid).solve(Rule::ALL);
    if outcome == Outcome::Exhausted {
        log::info!("budget exhausted, printing the partial grid");
    }
    print!("{}", grid);
}
