/// Set of functions used throughout to assure the correctness of the rod-cutting solvers.
pub mod assertions;
