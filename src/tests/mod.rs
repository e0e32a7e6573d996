#![cfg(test)]

mod rendering;
mod tracing;

use crate::engine::Search;

/// Runs the search for `n` and returns every solution as an owned snapshot,
/// in discovery order.
pub(crate) fn solve(n: usize) -> Vec<Vec<u32>> {
    let mut solutions = Vec::new();

    let mut search = Search::new(n);
    search.run(
        |assignment| solutions.push(assignment.to_vec()),
        |_, _| {},
    );

    solutions
}
