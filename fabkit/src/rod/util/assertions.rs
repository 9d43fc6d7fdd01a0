use crate::rod::entities::{Profit, RodInstance, RodSolution};
use log::error;

//Various checks to verify the correctness of rod-cutting results
//Used in debug_assert!() blocks and in tests

/// Checks the result contract: segments cover the rod exactly and the cut count is derived from them.
pub fn solution_is_consistent(solution: &RodSolution, length: usize) -> bool {
    let expected_n_cuts = solution.cuts.len().saturating_sub(1);
    if solution.number_of_cuts != expected_n_cuts {
        error!(
            "number of cuts {} does not match {} segments",
            solution.number_of_cuts,
            solution.cuts.len()
        );
        return false;
    }
    match solution.max_profit {
        Profit::Unsolvable => solution.cuts.is_empty(),
        Profit::Solved(_) => {
            solution.covered_length() == length && solution.cuts.iter().all(|&c| c > 0)
        }
    }
}

/// Checks that the reported profit equals the sum of the segment prices
pub fn profit_matches_cuts(solution: &RodSolution, instance: &RodInstance) -> bool {
    let Profit::Solved(profit) = solution.max_profit else {
        return solution.cuts.is_empty();
    };
    let summed = solution
        .cuts
        .iter()
        .map(|&c| instance.prices.price(c))
        .sum::<Option<u64>>();
    summed == Some(profit)
}

/// Checks that two strategies produced identical results
pub fn solutions_agree(a: &RodSolution, b: &RodSolution) -> bool {
    a.max_profit == b.max_profit && a.cuts == b.cuts && a.number_of_cuts == b.number_of_cuts
}
