use fabkit::rod::solvers::StrategyKind;
use serde::{Deserialize, Serialize};

/// Configuration for the fabkit optimizers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FabkitConfig {
    /// Strategy used to solve rod-cutting instances
    pub rod_strategy: StrategyKind,
    /// Also solve every rod with the other strategy and fail if the results differ
    pub cross_check: bool,
    /// Rods longer than this are never solved with the memoized strategy, its recursion depth equals the rod length.
    /// Requests beyond the limit fall back to tabulation.
    pub memo_length_limit: usize,
    /// Write an SVG drawing of every rod-cutting solution next to the JSON output
    #[serde(default = "default_svg_output")]
    pub svg_output: bool,
}

fn default_svg_output() -> bool {
    true
}

impl Default for FabkitConfig {
    fn default() -> Self {
        Self {
            rod_strategy: StrategyKind::Tabulated,
            cross_check: true,
            memo_length_limit: 1_000,
            svg_output: default_svg_output(),
        }
    }
}
