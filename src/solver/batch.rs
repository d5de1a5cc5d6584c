use log::info;
use rayon::prelude::*;

use crate::solver::constants::NUMBER_COUNT;
use crate::solver::core::ExpressionSolver;
use crate::solver::solution::Solution;

/// Six source numbers and the goal to reach with them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub numbers: [i64; NUMBER_COUNT],
    pub goal: i64,
}

impl Puzzle {
    pub fn new(numbers: [i64; NUMBER_COUNT], goal: i64) -> Self {
        Self { numbers, goal }
    }
}

/// Solves independent puzzles in parallel.
///
/// Every worker thread owns its own [`ExpressionSolver`]; a single puzzle is
/// always searched sequentially. Results are returned in input order.
pub fn solve_batch(puzzles: &[Puzzle]) -> Vec<Solution> {
    info!("Solving {} puzzles in parallel", puzzles.len());

    let solutions: Vec<Solution> = puzzles
        .par_iter()
        .map_init(ExpressionSolver::new, |solver, puzzle| {
            solver.solve(puzzle.numbers, puzzle.goal)
        })
        .collect();

    info!(
        "Finished batch: {} of {} puzzles have results",
        solutions
            .iter()
            .filter(|s| !s.is_empty())
            .count(),
        puzzles.len()
    );
    solutions
}
