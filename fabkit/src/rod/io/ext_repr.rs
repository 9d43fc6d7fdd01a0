use serde::{Deserialize, Serialize};

use crate::rod::solvers::StrategyKind;

/// Rod-cutting instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRodInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Length of the rod to cut
    pub length: i64,
    /// Price of a segment of length `i + 1` at position `i`
    pub prices: Vec<i64>,
}

/// Rod-cutting solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRodSolution {
    /// Maximum revenue, `null` if the rod cannot be covered by priced segments
    pub max_profit: Option<u64>,
    /// Segment lengths, leftmost first
    pub cuts: Vec<usize>,
    pub number_of_cuts: usize,
    /// Strategy which produced the solution
    pub strategy: StrategyKind,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: f64,
}
