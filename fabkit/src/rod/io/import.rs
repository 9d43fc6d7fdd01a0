use crate::rod::entities::{PriceTable, RodInstance};
use crate::rod::io::ext_repr::ExtRodInstance;
use anyhow::{Context, Result, ensure};
use itertools::Itertools;

/// Imports an instance into the library, rejecting negative lengths and prices.
pub fn import(ext_instance: &ExtRodInstance) -> Result<RodInstance> {
    let name = &ext_instance.name;
    ensure!(
        ext_instance.length >= 0,
        "instance {name:?}: rod length must be non-negative, got {}",
        ext_instance.length
    );
    let length = usize::try_from(ext_instance.length)
        .with_context(|| format!("instance {name:?}: rod length does not fit in memory"))?;

    let negative = ext_instance
        .prices
        .iter()
        .positions(|&p| p < 0)
        .map(|i| i + 1)
        .collect_vec();
    ensure!(
        negative.is_empty(),
        "instance {name:?}: prices must be non-negative, negative prices for segment lengths {negative:?}"
    );
    let prices = ext_instance
        .prices
        .iter()
        .map(|&p| p as u64)
        .collect_vec();
    let prices = PriceTable::new(prices);

    Ok(RodInstance::new(length, prices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(length: i64, prices: Vec<i64>) -> ExtRodInstance {
        ExtRodInstance {
            name: "test".to_string(),
            length,
            prices,
        }
    }

    #[test]
    fn valid_instance() {
        let instance = import(&ext(5, vec![2, 5, 7, 8, 10])).unwrap();
        assert_eq!(instance.length, 5);
        assert_eq!(instance.prices.prices(), &[2, 5, 7, 8, 10]);
    }

    #[test]
    fn negative_length_is_rejected() {
        assert!(import(&ext(-1, vec![1])).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = import(&ext(3, vec![1, -2, 3])).unwrap_err();
        assert!(err.to_string().contains("[2]"));
    }
}
