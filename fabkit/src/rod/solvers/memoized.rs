use crate::rod::entities::{PriceTable, Profit, RodInstance, RodSolution, SolutionRecord};
use crate::rod::solvers::{
    Decision, RodStrategy, StrategyKind, check_profit_bound, reconstruct, select_first_cut,
    subproblem_buffer,
};
use crate::rod::util::assertions;
use anyhow::Result;
use log::{debug, trace, warn};

/// Top-down rod-cutting solver: recursive evaluation with a memo keyed by remaining length.
/// A fresh memo is created for every solve, nothing is shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver;

impl RodStrategy for MemoizedSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Memoized
    }

    fn solve(&self, instance: &RodInstance) -> Result<RodSolution> {
        solve_memo(instance.length, &instance.prices)
    }
}

/// Solves a rod of `length` by top-down memoized recursion.
///
/// Fails if the profits could overflow `u64` or if the memo cannot be allocated.
pub fn solve_memo(length: usize, prices: &PriceTable) -> Result<RodSolution> {
    check_profit_bound(length, prices)?;

    let record = if length > 0 && prices.is_empty() {
        SolutionRecord::unsolvable()
    } else {
        let mut memo = Memo::new(length, prices)?;
        memo.evaluate(length);
        debug!(
            "[MEMO] {} subproblems evaluated for a rod of length {}",
            memo.n_evaluated, length
        );
        reconstruct(length, |r| memo.finalized(r))
    };

    debug!(
        "[MEMO] solved rod of length {}: profit {}, cuts {:?}",
        length, record.profit, record.cuts
    );
    if !record.profit.is_solved() {
        warn!("[MEMO] no priced decomposition exists for a rod of length {length}");
    }

    let solution = RodSolution::from_record(record);
    debug_assert!(assertions::solution_is_consistent(&solution, length));
    Ok(solution)
}

/// Call-scoped memo, one write-once slot per remaining length `0..=length`.
struct Memo<'a> {
    prices: &'a PriceTable,
    slots: Vec<Option<Decision>>,
    n_evaluated: usize,
}

impl<'a> Memo<'a> {
    fn new(length: usize, prices: &'a PriceTable) -> Result<Self> {
        let mut slots = subproblem_buffer(length)?;
        slots.resize(length + 1, None);
        slots[0] = Some(Decision::EMPTY);
        Ok(Self {
            prices,
            slots,
            n_evaluated: 0,
        })
    }

    /// Ensures the decision for `remaining` is finalized and returns its profit.
    /// Every recursive call strictly decreases the remaining length.
    fn evaluate(&mut self, remaining: usize) -> Profit {
        if let Some(decision) = self.slots[remaining] {
            return decision.profit;
        }

        let prices = self.prices;
        let decision = select_first_cut(remaining, prices, |r| self.evaluate(r));
        trace!(
            "[MEMO] length {remaining}: profit {}, first cut {:?}",
            decision.profit, decision.first_cut
        );

        debug_assert!(self.slots[remaining].is_none(), "memo slot {remaining} written twice");
        self.slots[remaining] = Some(decision);
        self.n_evaluated += 1;
        decision.profit
    }

    fn finalized(&self, remaining: usize) -> Decision {
        self.slots[remaining].expect("only evaluated lengths are reachable through first cuts")
    }
}
