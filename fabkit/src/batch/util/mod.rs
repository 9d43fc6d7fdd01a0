/// Set of functions used throughout to assure the correctness of print plans.
pub mod assertions;
