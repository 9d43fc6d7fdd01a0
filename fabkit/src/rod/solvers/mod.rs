mod memoized;
mod tabulated;

pub use memoized::{MemoizedSolver, solve_memo};
pub use tabulated::{TabulatedSolver, solve_table};

use crate::rod::entities::{PriceTable, Profit, RodInstance, RodSolution, SolutionRecord};
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Trait for rod-cutting strategies. All strategies must agree on both the optimal
/// profit and the reconstructed cuts for every instance.
pub trait RodStrategy {
    fn kind(&self) -> StrategyKind;

    fn solve(&self, instance: &RodInstance) -> Result<RodSolution>;
}

/// Selectable rod-cutting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Top-down recursion with a per-call memo. Recursion depth equals the rod length.
    Memoized,
    /// Bottom-up iteration over increasing lengths, no recursion
    Tabulated,
}

impl StrategyKind {
    pub fn solve(self, instance: &RodInstance) -> Result<RodSolution> {
        match self {
            StrategyKind::Memoized => MemoizedSolver.solve(instance),
            StrategyKind::Tabulated => TabulatedSolver.solve(instance),
        }
    }

    /// The strategy used to verify results of this one
    pub fn counterpart(self) -> StrategyKind {
        match self {
            StrategyKind::Memoized => StrategyKind::Tabulated,
            StrategyKind::Tabulated => StrategyKind::Memoized,
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Memoized => write!(f, "memoized"),
            StrategyKind::Tabulated => write!(f, "tabulated"),
        }
    }
}

/// Outcome of a single subproblem: its best profit and the first cut achieving it.
/// The full cut list is only rebuilt once, for the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    profit: Profit,
    /// `None` for the empty rod and for unsolvable lengths
    first_cut: Option<usize>,
}

impl Decision {
    const EMPTY: Decision = Decision {
        profit: Profit::ZERO,
        first_cut: None,
    };

    const UNSOLVABLE: Decision = Decision {
        profit: Profit::Unsolvable,
        first_cut: None,
    };
}

/// Rejects instances whose profits could exceed `u64`.
/// A decomposition has at most `length` segments, so its profit is bounded by `max_price * length`.
fn check_profit_bound(length: usize, prices: &PriceTable) -> Result<()> {
    if let Some(max_price) = prices.max_price() {
        let bound = u64::try_from(length)
            .ok()
            .and_then(|l| max_price.checked_mul(l));
        ensure!(
            bound.is_some(),
            "profits for a rod of length {length} with prices up to {max_price} overflow u64"
        );
    }
    Ok(())
}

/// Allocates an empty buffer for the subproblems `0..=length`, failing instead of aborting when it cannot.
fn subproblem_buffer<T>(length: usize) -> Result<Vec<T>> {
    let n_slots = length
        .checked_add(1)
        .context("rod length exceeds the addressable range")?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(n_slots)
        .with_context(|| format!("could not allocate {n_slots} subproblems"))?;
    Ok(buffer)
}

/// Scans every eligible first-cut length `1..=remaining` in increasing order.
/// A candidate only replaces the running best on a strict improvement, so ties resolve to the shortest first cut.
/// Returns the unsolvable decision when no candidate yields a solvable decomposition.
fn select_first_cut(
    remaining: usize,
    prices: &PriceTable,
    mut remainder_profit: impl FnMut(usize) -> Profit,
) -> Decision {
    let mut best = Decision::UNSOLVABLE;

    for length in 1..=remaining {
        let Some(price) = prices.price(length) else {
            //lengths beyond the price table are never eligible
            break;
        };
        let profit = remainder_profit(remaining - length) + price;
        if profit > best.profit {
            best = Decision {
                profit,
                first_cut: Some(length),
            };
        }
    }
    best
}

/// Rebuilds the leftmost-first cut list of `length` by following the first cuts of the finalized decisions.
fn reconstruct(length: usize, decision: impl Fn(usize) -> Decision) -> SolutionRecord {
    let profit = decision(length).profit;
    let mut cuts = vec![];
    let mut remaining = length;
    while let Some(first_cut) = decision(remaining).first_cut {
        cuts.push(first_cut);
        remaining -= first_cut;
    }
    debug_assert!(!profit.is_solved() || remaining == 0);
    SolutionRecord { profit, cuts }
}
