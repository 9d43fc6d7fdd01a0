use std::time::Instant;

use crate::config::FabkitConfig;
use crate::io::output::RodOutputEntry;
use anyhow::{Result, ensure};
use fabkit::rod::entities::{RodInstance, RodSolution};
use fabkit::rod::io;
use fabkit::rod::io::ext_repr::ExtRodInstance;
use fabkit::rod::solvers::StrategyKind;
use fabkit::rod::util::assertions;
use log::{info, warn};
use rayon::prelude::*;
use thousands::Separable;

/// A solved instance, in both internal and external representation
pub struct SolvedRod {
    pub instance: RodInstance,
    pub solution: RodSolution,
    pub entry: RodOutputEntry,
}

/// Drives the rod-cutting solvers according to a [`FabkitConfig`].
pub struct FabkitOptimizerRod {
    pub config: FabkitConfig,
}

impl FabkitOptimizerRod {
    pub fn new(config: FabkitConfig) -> Self {
        Self { config }
    }

    /// Strategy actually used for an instance, honoring the memo length limit
    pub fn effective_strategy(&self, kind: StrategyKind, instance: &RodInstance) -> StrategyKind {
        match kind {
            StrategyKind::Memoized if instance.length > self.config.memo_length_limit => {
                warn!(
                    "[ROD] length {} exceeds the memo length limit ({}), falling back to tabulation",
                    instance.length, self.config.memo_length_limit
                );
                StrategyKind::Tabulated
            }
            kind => kind,
        }
    }

    pub fn solve(&self, instance: &RodInstance) -> Result<(RodSolution, StrategyKind)> {
        let strategy = self.effective_strategy(self.config.rod_strategy, instance);
        let solution = strategy.solve(instance)?;

        if self.config.cross_check {
            let counterpart = self.effective_strategy(strategy.counterpart(), instance);
            if counterpart != strategy {
                let check = counterpart.solve(instance)?;
                ensure!(
                    assertions::solutions_agree(&solution, &check),
                    "{strategy} and {counterpart} solutions differ for length {}: {:?} vs {:?}",
                    instance.length,
                    solution,
                    check
                );
            }
        }
        Ok((solution, strategy))
    }

    /// Imports, solves and exports a set of instances. Instances are solved in parallel, each with its own memo or table.
    pub fn solve_all(&self, ext_instances: Vec<ExtRodInstance>) -> Result<Vec<SolvedRod>> {
        let start = Instant::now();

        let entries = ext_instances
            .into_par_iter()
            .map(|ext_instance| {
                let instance = io::import(&ext_instance)?;
                let solve_start = Instant::now();
                let (solution, strategy) = self.solve(&instance)?;
                info!(
                    "[ROD] {:?} (length {}): profit {} with {} cuts {:?}",
                    ext_instance.name,
                    instance.length,
                    solution.max_profit,
                    solution.number_of_cuts,
                    solution.cuts
                );
                let entry = RodOutputEntry {
                    solution: io::export(&solution, strategy, solve_start.elapsed()),
                    instance: ext_instance,
                };
                Ok(SolvedRod {
                    instance,
                    solution,
                    entry,
                })
            })
            .collect::<Result<Vec<SolvedRod>>>()?;

        let total_length = entries.iter().map(|e| e.instance.length).sum::<usize>();
        info!(
            "[ROD] solved {} instances (total length {}) in {:.3}ms",
            entries.len(),
            total_length.separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabkit::rod::entities::{PriceTable, Profit};

    #[test]
    fn memo_falls_back_beyond_limit() {
        let config = FabkitConfig {
            rod_strategy: StrategyKind::Memoized,
            memo_length_limit: 10,
            ..FabkitConfig::default()
        };
        let optimizer = FabkitOptimizerRod::new(config);
        let short = RodInstance::new(10, PriceTable::from(vec![1, 3]));
        let long = RodInstance::new(11, PriceTable::from(vec![1, 3]));
        assert_eq!(
            optimizer.effective_strategy(StrategyKind::Memoized, &short),
            StrategyKind::Memoized
        );
        assert_eq!(
            optimizer.effective_strategy(StrategyKind::Memoized, &long),
            StrategyKind::Tabulated
        );
        let (solution, strategy) = optimizer.solve(&long).unwrap();
        assert_eq!(strategy, StrategyKind::Tabulated);
        assert_eq!(solution.max_profit, Profit::Solved(16));
    }
}
