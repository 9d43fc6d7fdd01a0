use crate::rod::entities::Profit;

/// Best decomposition found for a single remaining length.
/// Once finalized by a solver, a record is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRecord {
    pub profit: Profit,
    /// Segment lengths, leftmost cut first
    pub cuts: Vec<usize>,
}

impl SolutionRecord {
    pub fn unsolvable() -> Self {
        Self {
            profit: Profit::Unsolvable,
            cuts: vec![],
        }
    }
}

/// Final result of a rod-cutting solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodSolution {
    pub max_profit: Profit,
    /// Segment lengths, leftmost cut first. Sums to the rod length when solvable.
    pub cuts: Vec<usize>,
    /// Physical cuts needed: one less than the number of segments, zero for an empty plan
    pub number_of_cuts: usize,
}

impl RodSolution {
    pub fn from_record(record: SolutionRecord) -> Self {
        let number_of_cuts = record.cuts.len().saturating_sub(1);
        Self {
            max_profit: record.profit,
            cuts: record.cuts,
            number_of_cuts,
        }
    }

    /// Total length covered by the segments
    pub fn covered_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    pub fn n_segments(&self) -> usize {
        self.cuts.len()
    }
}
