/// Entities to model the print batching problem
pub mod entities;

/// Importing print instances into and exporting plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod greedy;

#[doc(inline)]
pub use greedy::optimize_printing;
