use comfy_table::{Cell, Table};

use crate::core::{FolderReport, ReportRow, Totals};
use crate::output::format::{Palette, cost_cell, count_cell, heading, name_cell, report_table};
use crate::pricing::EMBEDDING_MODELS;

/// Short column label: `text-embedding-3-small` -> `3-small`
fn model_label(model: &str) -> &str {
    model.strip_prefix("text-embedding-").unwrap_or(model)
}

fn build_header(palette: Palette) -> Vec<Cell> {
    let mut header = vec![
        heading("Document", palette),
        heading("Chars", palette),
        heading("Tokens", palette),
    ];
    header.extend(
        EMBEDDING_MODELS
            .iter()
            .map(|model| heading(model_label(model), palette)),
    );
    header
}

fn add_document_row(table: &mut Table, row: &ReportRow, palette: Palette) {
    let mut cells = vec![
        name_cell(&row.record.filename, palette, false),
        count_cell(row.record.character_count, palette, false),
        count_cell(row.record.token_count, palette, false),
    ];
    cells.extend(
        row.costs
            .prices()
            .iter()
            .map(|price| cost_cell(*price, palette, false)),
    );
    table.add_row(cells);
}

fn add_total_row(table: &mut Table, totals: &Totals, palette: Palette) {
    let mut cells = vec![
        name_cell("TOTAL", palette, true),
        count_cell(totals.character_count, palette, true),
        count_cell(totals.token_count, palette, true),
    ];
    cells.extend(
        totals
            .costs
            .prices()
            .iter()
            .map(|price| cost_cell(*price, palette, true)),
    );
    table.add_row(cells);
}

pub(crate) fn render_report_table(report: &FolderReport, use_color: bool) -> String {
    let palette = Palette::new(use_color);
    let mut table = report_table();
    table.set_header(build_header(palette));

    for row in &report.rows {
        add_document_row(&mut table, row, palette);
    }
    add_total_row(&mut table, &report.totals, palette);

    table.to_string()
}

pub(crate) fn print_report_table(report: &FolderReport, use_color: bool) {
    println!("\n  Token Usage: {}\n", report.folder);
    println!("{}", render_report_table(report, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DocumentRecord;

    fn sample_report() -> FolderReport {
        let rows = vec![ReportRow::new(DocumentRecord {
            filename: "journal.md".to_string(),
            character_count: 12_345,
            token_count: 3_000,
        })];
        let mut totals = Totals::default();
        totals.add(&rows[0]);
        FolderReport {
            folder: "notes".to_string(),
            rows,
            totals,
        }
    }

    #[test]
    fn model_label_strips_prefix() {
        assert_eq!(model_label("text-embedding-3-small"), "3-small");
        assert_eq!(model_label("custom"), "custom");
    }

    #[test]
    fn table_contains_rows_and_total() {
        let rendered = render_report_table(&sample_report(), false);
        assert!(rendered.contains("journal.md"));
        assert!(rendered.contains("12,345"));
        assert!(rendered.contains("3,000"));
        assert!(rendered.contains("$0.000390"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("ada-002"));
    }

    #[test]
    fn table_without_documents_still_has_total() {
        let report = FolderReport {
            folder: "empty".to_string(),
            rows: Vec::new(),
            totals: Totals::default(),
        };
        let rendered = render_report_table(&report, false);
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("$0.000000"));
    }
}
