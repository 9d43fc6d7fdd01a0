/// Entities to model the rod-cutting problem
pub mod entities;

/// Top-down and bottom-up solvers
pub mod solvers;

/// Importing rod instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use solvers::{solve_memo, solve_table};
