use fake::{Dummy, rand::seq::IteratorRandom};
use rust_decimal::Decimal;

pub struct Price;

impl Dummy<Price> for Decimal {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Price, rng: &mut R) -> Self {
        let value = (10..1000).choose(rng).unwrap();
        Decimal::new(value, 2)
    }
}

pub struct Quantity;

impl Dummy<Quantity> for u32 {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Quantity, rng: &mut R) -> Self {
        (1..20u32).choose(rng).unwrap()
    }
}
