//! Core data types for a single accounting run

use crate::pricing::ModelCosts;

/// Character and token counts for one document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct DocumentRecord {
    pub(crate) filename: String,
    /// Unicode scalar values, not bytes
    pub(crate) character_count: u64,
    pub(crate) token_count: u64,
}

/// One report line: a document plus its price under each embedding model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportRow {
    pub(crate) record: DocumentRecord,
    pub(crate) costs: ModelCosts,
}

impl ReportRow {
    pub(crate) fn new(record: DocumentRecord) -> Self {
        let costs = ModelCosts::for_tokens(record.token_count);
        Self { record, costs }
    }
}

/// Sums over every row of a report
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) character_count: u64,
    pub(crate) token_count: u64,
    pub(crate) costs: ModelCosts,
}

impl Totals {
    pub(crate) fn add(&mut self, row: &ReportRow) {
        self.character_count += row.record.character_count;
        self.token_count += row.record.token_count;
        self.costs.add(&row.costs);
    }
}

/// Everything the report writers need: rows in output order plus totals
#[derive(Debug, Clone)]
pub(crate) struct FolderReport {
    /// Folder path as given by the operator; labels the totals row
    pub(crate) folder: String,
    pub(crate) rows: Vec<ReportRow>,
    pub(crate) totals: Totals,
}

impl FolderReport {
    pub(crate) fn document_count(&self) -> usize {
        self.rows.len()
    }
}
