//! Core accounting: data types, per-document measurement, and totals

mod accountant;
mod aggregator;
mod types;

pub(crate) use accountant::account_documents;
pub(crate) use types::{FolderReport, ReportRow, Totals};

#[cfg(test)]
pub(crate) use types::DocumentRecord;
