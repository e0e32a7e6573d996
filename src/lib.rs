//! Enumeration of all placements of `n` non-attacking queens on an `n` x `n`
//! board, together with the textual, graphical and trace renderings of the
//! results.
//!
//! The [`engine`] module contains the backtracking search itself, which is a
//! pure enumerator driven through callbacks. The [`output`] module turns
//! complete placements into their user-facing forms, and [`problem`] ties the
//! two together for one run. The [`runner`] module is the command-line
//! front-end.

pub mod engine;
pub mod error;
pub mod io;
pub mod output;
pub mod problem;
pub mod runner;

mod tests;

pub use error::QueensError;
pub use problem::Problem;
pub use problem::MAX_BOARD_SIZE;
