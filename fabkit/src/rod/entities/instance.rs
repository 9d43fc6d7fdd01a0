use crate::rod::entities::PriceTable;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Instance of the rod-cutting problem: a rod of a given length and the prices of its possible segments.
pub struct RodInstance {
    /// Length of the rod to decompose
    pub length: usize,
    pub prices: PriceTable,
}

impl RodInstance {
    pub fn new(length: usize, prices: PriceTable) -> Self {
        Self { length, prices }
    }

    /// A rod with a non-zero length can only be covered if at least a unit segment is priced
    pub fn is_solvable(&self) -> bool {
        self.length == 0 || !self.prices.is_empty()
    }
}
