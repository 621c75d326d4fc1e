use criterion::{criterion_group, criterion_main, Criterion};
use deduku::{EliminationSolver, Grid, Rule};

const EASY: &str =
    "534.7...267.....4..9....5....97.14...2..5.7....3924....6...72...8..196353.528.17.";
const SPARSE: &str =
    "....789...........19.3..........14.34.6....9.71..2.8.6...5...84.87..9..53......7.";
const EXPERT: &str =
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400";

fn solve_easy(c: &mut Criterion) {
    let grid = Grid::from_str_line(EASY).unwrap();
    c.bench_function("solve_easy", |b| {
        b.iter(|| EliminationSolver::from_grid(grid.clone()).solve(Rule::ALL))
    });
}

fn solve_sparse(c: &mut Criterion) {
    let grid = Grid::from_str_line(SPARSE).unwrap();
    c.bench_function("solve_sparse", |b| {
        b.iter(|| EliminationSolver::from_grid(grid.clone()).solve(Rule::ALL))
    });
}

fn exhaust_expert(c: &mut Criterion) {
    // stalls and burns the whole budget, the worst case for the worklist
    let grid = Grid::from_str_line(EXPERT).unwrap();
    c.bench_function("exhaust_expert", |b| {
        b.iter(|| EliminationSolver::from_grid(grid.clone()).solve(Rule::ALL))
    });
}

criterion_group!(benches, solve_easy, solve_sparse, exhaust_expert);
criterion_main!(benches);
