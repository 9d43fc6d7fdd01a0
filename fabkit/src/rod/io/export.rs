use crate::rod::entities::RodSolution;
use crate::rod::io::ext_repr::ExtRodSolution;
use crate::rod::solvers::StrategyKind;
use std::time::Duration;

/// Exports a solution out of the library
pub fn export(solution: &RodSolution, strategy: StrategyKind, run_time: Duration) -> ExtRodSolution {
    ExtRodSolution {
        max_profit: solution.max_profit.value(),
        cuts: solution.cuts.clone(),
        number_of_cuts: solution.number_of_cuts,
        strategy,
        run_time_ms: run_time.as_secs_f64() * 1000.0,
    }
}
