mod table;
mod types;

pub(crate) use table::EMBEDDING_MODELS;
pub(crate) use types::{ModelCosts, Price};
