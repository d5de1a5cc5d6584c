//! Solver Benchmark
//!
//! Times a full search for the reference puzzle and a puzzle with no answer.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use countdown::{ExpressionSolver, Puzzle, solve_batch};

fn bench_reference_puzzle(c: &mut Criterion) {
    let mut solver = ExpressionSolver::new();
    c.bench_function("solve 7 3 4 5 15 75 -> 785", |b| {
        b.iter(|| solver.solve(black_box([7, 3, 4, 5, 15, 75]), black_box(785)))
    });
}

fn bench_unreachable_goal(c: &mut Criterion) {
    let mut solver = ExpressionSolver::new();
    c.bench_function("solve 25 50 75 100 3 6 -> 999", |b| {
        b.iter(|| solver.solve(black_box([25, 50, 75, 100, 3, 6]), black_box(999)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let puzzles: Vec<Puzzle> = (101..=132)
        .map(|goal| Puzzle::new([1, 3, 4, 6, 25, 100], goal * 7))
        .collect();
    c.bench_function("solve_batch 32 puzzles", |b| {
        b.iter(|| solve_batch(black_box(&puzzles)))
    });
}

criterion_group!(
    benches,
    bench_reference_puzzle,
    bench_unreachable_goal,
    bench_batch
);
criterion_main!(benches);
