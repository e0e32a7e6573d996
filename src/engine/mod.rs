//! The backtracking search over queen placements.

pub(crate) mod conflict;

/// Recursive backtracking enumerator over an `n` x `n` board.
///
/// The search owns a single assignment buffer which maps each 0-based row
/// index to the 1-based column of the queen in that row. The buffer is
/// mutated in place while the search runs; callers that want to keep a
/// complete placement must copy it out of the callback, because the slice
/// they are handed is reused by the remainder of the enumeration.
///
/// Solutions are produced in depth-first, ascending-column, row-major order.
/// That order is deterministic and part of the observable behaviour, since
/// solution numbering and file contents depend on it.
///
/// The engine performs no I/O and cannot fail; everything effectful happens
/// in the two callbacks.
#[derive(Debug)]
pub struct Search {
    size: usize,
    assignment: Vec<u32>,
}

impl Search {
    pub fn new(size: usize) -> Search {
        Search {
            size,
            assignment: vec![0; size],
        }
    }

    /// Runs the enumeration to completion.
    ///
    /// `on_solution` is invoked exactly once per complete non-attacking
    /// placement, in discovery order. `on_attempt` is invoked for candidate
    /// placements at the last row only, with the acceptance verdict; earlier
    /// rows are pruned and retried silently. Callers that do not trace pass
    /// a no-op closure.
    pub fn run(
        &mut self,
        mut on_solution: impl FnMut(&[u32]),
        mut on_attempt: impl FnMut(&[u32], bool),
    ) {
        if self.size == 0 {
            return;
        }

        self.place(0, &mut on_solution, &mut on_attempt);
    }

    fn place(
        &mut self,
        k: usize,
        on_solution: &mut impl FnMut(&[u32]),
        on_attempt: &mut impl FnMut(&[u32], bool),
    ) {
        let last_row = self.size - 1;

        self.assignment[k] = 0;
        while self.assignment[k] < self.size as u32 {
            self.assignment[k] += 1;

            let accepted = conflict::is_safe(&self.assignment, k);
            if accepted {
                if k == last_row {
                    on_solution(&self.assignment);
                } else {
                    self.place(k + 1, on_solution, on_attempt);
                }
            }

            // Attempts are only reported while filling the last row, and only
            // once a column has actually been tried there. On a 1 x 1 board
            // the single placement is not reported at all.
            if k == last_row && self.assignment[k] > 0 && self.size > 1 {
                on_attempt(&self.assignment, accepted);
            }
        }
    }
}
