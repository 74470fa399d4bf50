use super::types::Price;

pub(crate) const MODEL_COUNT: usize = 3;

/// Embedding models priced in every report, in column order
pub(crate) const EMBEDDING_MODELS: [&str; MODEL_COUNT] = [
    "text-embedding-3-small",
    "text-embedding-3-large",
    "text-embedding-ada-002",
];

/// USD per 1,000 tokens (OpenAI list prices, March 2024)
const PRICING: &[(&str, f64)] = &[
    ("text-embedding-3-small", 0.00002),
    ("text-embedding-3-large", 0.00013),
    ("text-embedding-ada-002", 0.00010),
];

/// Rate applied to any model missing from the table
const DEFAULT_RATE: f64 = 0.01;

pub(crate) fn rate_per_thousand(model: &str) -> f64 {
    PRICING
        .iter()
        .find(|(name, _)| *name == model)
        .map_or(DEFAULT_RATE, |&(_, rate)| rate)
}

/// Price of `tokens` under `model`, rounded to six decimal places
pub(crate) fn estimate_price(tokens: u64, model: &str) -> Price {
    let dollars = tokens as f64 / 1000.0 * rate_per_thousand(model);
    Price::from_dollars(dollars)
}
