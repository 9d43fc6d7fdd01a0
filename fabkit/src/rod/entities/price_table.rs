/// Market prices of rod segments, indexed by segment length.
/// Entry `i` holds the price of a segment of length `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: Vec<u64>,
}

impl PriceTable {
    pub fn new(prices: Vec<u64>) -> Self {
        Self { prices }
    }

    /// Price of a segment of exactly `length`, if the table defines one.
    /// A length of zero is never priced.
    pub fn price(&self, length: usize) -> Option<u64> {
        match length {
            0 => None,
            l => self.prices.get(l - 1).copied(),
        }
    }

    pub fn max_price(&self) -> Option<u64> {
        self.prices.iter().copied().max()
    }

    /// Returns a copy of the table with one more entry, priced at `price`
    pub fn with_price(&self, price: u64) -> Self {
        let mut prices = self.prices.clone();
        prices.push(price);
        Self { prices }
    }

    pub fn prices(&self) -> &[u64] {
        &self.prices
    }

    /// Longest segment length with a defined price
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<Vec<u64>> for PriceTable {
    fn from(prices: Vec<u64>) -> Self {
        Self::new(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::PriceTable;

    #[test]
    fn lengths_are_one_indexed() {
        let table = PriceTable::from(vec![2, 5, 7]);
        assert_eq!(table.price(0), None);
        assert_eq!(table.price(1), Some(2));
        assert_eq!(table.price(3), Some(7));
        assert_eq!(table.price(4), None);
        assert_eq!(table.len(), 3);
    }
}
