//! Per-document accounting: read, decode, count, price

use std::borrow::Cow;
use std::fs;

use crate::core::aggregator::build_report;
use crate::core::types::{DocumentRecord, FolderReport, ReportRow};
use crate::error::AppError;
use crate::source::DocumentPath;
use crate::tokens::TokenCounter;
use crate::utils::debug_enabled;

/// Text-mode newline translation: `\r\n` and lone `\r` become `\n`
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

pub(crate) fn measure_text(filename: &str, text: &str, counter: &TokenCounter) -> DocumentRecord {
    let text = normalize_newlines(text);
    DocumentRecord {
        filename: filename.to_string(),
        character_count: text.chars().count() as u64,
        token_count: counter.count(&text),
    }
}

fn account_document(doc: &DocumentPath, counter: &TokenCounter) -> Result<ReportRow, AppError> {
    let bytes = fs::read(&doc.path).map_err(|source| AppError::ReadDocument {
        path: doc.path.clone(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| AppError::InvalidUtf8 {
        path: doc.path.clone(),
    })?;

    let record = measure_text(&doc.filename, &text, counter);
    if debug_enabled() {
        eprintln!(
            "[debug] {}: {} chars, {} tokens",
            record.filename, record.character_count, record.token_count
        );
    }
    Ok(ReportRow::new(record))
}

/// Account every document in order. The first unreadable or non-UTF-8
/// document aborts the run.
pub(crate) fn account_documents(
    folder: String,
    documents: &[DocumentPath],
    counter: &TokenCounter,
) -> Result<FolderReport, AppError> {
    let rows = documents
        .iter()
        .map(|doc| account_document(doc, counter))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_report(folder, rows))
}
