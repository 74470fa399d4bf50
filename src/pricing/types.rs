use std::ops::AddAssign;

use super::table::{EMBEDDING_MODELS, MODEL_COUNT, estimate_price};

const MICROS_PER_DOLLAR: f64 = 1_000_000.0;

/// Minimum width of a per-document price cell, right-padded with zeros
const PADDED_WIDTH: usize = 10;

/// USD amount held as whole micro-dollars so sums of rounded prices stay exact
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Price(u64);

impl Price {
    pub(crate) const ZERO: Price = Price(0);

    /// Rounds the exact binary value of `dollars` to six decimals in a single
    /// step, the same way `{:.6}` formatting does.
    pub(crate) fn from_dollars(dollars: f64) -> Self {
        if !dollars.is_finite() || dollars <= 0.0 {
            return Price::ZERO;
        }
        let formatted = format!("{dollars:.6}");
        let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "0"));
        let whole: u64 = whole.parse().unwrap_or(0);
        let fraction: u64 = fraction.parse().unwrap_or(0);
        Price(whole * 1_000_000 + fraction)
    }

    pub(crate) fn micros(self) -> u64 {
        self.0
    }

    pub(crate) fn as_dollars(self) -> f64 {
        self.0 as f64 / MICROS_PER_DOLLAR
    }

    /// Six decimal places: `0.000130`
    pub(crate) fn fixed(self) -> String {
        let micros = self.micros();
        format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
    }

    /// Six decimal places padded with trailing zeros to ten characters: `0.00013000`
    pub(crate) fn padded(self) -> String {
        format!("{:0<width$}", self.fixed(), width = PADDED_WIDTH)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Price) {
        self.0 += other.0;
    }
}

/// One price per embedding model, in `EMBEDDING_MODELS` order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModelCosts([Price; MODEL_COUNT]);

impl ModelCosts {
    pub(crate) fn for_tokens(tokens: u64) -> Self {
        ModelCosts(EMBEDDING_MODELS.map(|model| estimate_price(tokens, model)))
    }

    pub(crate) fn add(&mut self, other: &ModelCosts) {
        for (total, price) in self.0.iter_mut().zip(other.0) {
            *total += price;
        }
    }

    pub(crate) fn prices(&self) -> &[Price] {
        &self.0
    }

    /// (model, price) pairs in column order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, Price)> + '_ {
        EMBEDDING_MODELS.into_iter().zip(self.0)
    }
}
