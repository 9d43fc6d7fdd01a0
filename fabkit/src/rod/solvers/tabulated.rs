use crate::rod::entities::{PriceTable, RodInstance, RodSolution, SolutionRecord};
use crate::rod::solvers::{
    Decision, RodStrategy, StrategyKind, check_profit_bound, reconstruct, select_first_cut,
    subproblem_buffer,
};
use crate::rod::util::assertions;
use anyhow::Result;
use log::{debug, trace, warn};

/// Bottom-up rod-cutting solver. Builds the decisions for lengths `0..=n` in increasing order,
/// without recursion. Preferred for long rods.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolver;

impl RodStrategy for TabulatedSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tabulated
    }

    fn solve(&self, instance: &RodInstance) -> Result<RodSolution> {
        solve_table(instance.length, &instance.prices)
    }
}

/// Solves a rod of `length` by bottom-up tabulation.
///
/// Fails if the profits could overflow `u64` or if the table cannot be allocated.
pub fn solve_table(length: usize, prices: &PriceTable) -> Result<RodSolution> {
    check_profit_bound(length, prices)?;

    let record = if length > 0 && prices.is_empty() {
        SolutionRecord::unsolvable()
    } else {
        //table[j] is finalized once pushed, so every remainder j - i < j is available when j is processed
        let mut table: Vec<Decision> = subproblem_buffer(length)?;
        table.push(Decision::EMPTY);

        for remaining in 1..=length {
            let decision = select_first_cut(remaining, prices, |r| table[r].profit);
            trace!(
                "[TABLE] length {remaining}: profit {}, first cut {:?}",
                decision.profit, decision.first_cut
            );
            table.push(decision);
        }
        debug_assert_eq!(table.len(), length + 1);

        reconstruct(length, |r| table[r])
    };

    debug!(
        "[TABLE] solved rod of length {}: profit {}, cuts {:?}",
        length, record.profit, record.cuts
    );
    if !record.profit.is_solved() {
        warn!("[TABLE] no priced decomposition exists for a rod of length {length}");
    }

    let solution = RodSolution::from_record(record);
    debug_assert!(assertions::solution_is_consistent(&solution, length));
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rod::entities::Profit;

    #[test]
    fn whole_rod_when_it_dominates() {
        let solution = solve_table(3, &PriceTable::from(vec![1, 3, 8])).unwrap();
        assert_eq!(solution.max_profit, Profit::Solved(8));
        assert_eq!(solution.cuts, vec![3]);
        assert_eq!(solution.number_of_cuts, 0);
    }

    #[test]
    fn empty_price_table_is_unsolvable() {
        let solution = solve_table(1, &PriceTable::from(vec![])).unwrap();
        assert_eq!(solution.max_profit, Profit::Unsolvable);
        assert!(solution.cuts.is_empty());
        assert_eq!(solution.number_of_cuts, 0);
    }

    #[test]
    fn long_rod_in_linear_memory() {
        let solution = solve_table(30_000, &PriceTable::from(vec![1, 3])).unwrap();
        assert_eq!(solution.max_profit, Profit::Solved(45_000));
        assert_eq!(solution.cuts.len(), 15_000);
        assert!(solution.cuts.iter().all(|&c| c == 2));
    }

    #[test]
    fn huge_unpriced_rod_is_unsolvable_without_allocating() {
        let solution = solve_table(i64::MAX as usize, &PriceTable::default()).unwrap();
        assert_eq!(solution.max_profit, Profit::Unsolvable);
        assert_eq!(solution.number_of_cuts, 0);
    }

    #[test]
    fn unallocatable_table_is_an_error() {
        //zero prices keep the profit bound, but the table cannot exist
        assert!(solve_table(i64::MAX as usize, &PriceTable::from(vec![0])).is_err());
    }

    #[test]
    fn overflowing_profits_are_an_error() {
        let prices = PriceTable::from(vec![u64::MAX / 2 + 1, 1]);
        assert!(solve_table(2, &prices).is_err());
    }

    #[test]
    fn profits_up_to_the_bound_are_exact() {
        let prices = PriceTable::from(vec![u64::MAX / 2, 1]);
        let solution = solve_table(2, &prices).unwrap();
        assert_eq!(solution.max_profit, Profit::Solved(u64::MAX - 1));
        assert_eq!(solution.cuts, vec![1, 1]);
    }
}
