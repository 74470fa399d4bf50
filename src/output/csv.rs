use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::FolderReport;
use crate::error::AppError;
use crate::pricing::{EMBEDDING_MODELS, ModelCosts, Price};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn write_costs(out: &mut String, costs: &ModelCosts, format: fn(Price) -> String) {
    for price in costs.prices() {
        let _ = write!(out, ",{}", format(*price));
    }
}

/// Render the report: header, one row per document, then the totals row
pub(crate) fn render_report_csv(report: &FolderReport) -> String {
    let mut out = String::new();
    let _ = write!(out, "Filename,Character Count,Tokens");
    for model in EMBEDDING_MODELS {
        let _ = write!(out, ",{model}");
    }
    out.push('\n');

    for row in &report.rows {
        let _ = write!(
            out,
            "{},{},{}",
            csv_escape(&row.record.filename),
            row.record.character_count,
            row.record.token_count,
        );
        write_costs(&mut out, &row.costs, Price::padded);
        out.push('\n');
    }

    let totals = &report.totals;
    let _ = write!(
        out,
        "{},{},{}",
        csv_escape(&report.folder),
        totals.character_count,
        totals.token_count,
    );
    write_costs(&mut out, &totals.costs, Price::fixed);
    out.push('\n');

    out
}

/// Create (or truncate) `path` and write the rendered report to it
pub(crate) fn write_report(path: &Path, report: &FolderReport) -> Result<(), AppError> {
    let write_error = |source| AppError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_report_csv(report).as_bytes())
        .map_err(write_error)?;
    writer.flush().map_err(write_error)
}
