//! Folds per-document rows into report totals

use crate::core::types::{FolderReport, ReportRow, Totals};

pub(crate) fn fold_totals(rows: &[ReportRow]) -> Totals {
    rows.iter().fold(Totals::default(), |mut totals, row| {
        totals.add(row);
        totals
    })
}

/// Build a report, computing totals from `rows` (consumes rows to avoid cloning)
pub(crate) fn build_report(folder: String, rows: Vec<ReportRow>) -> FolderReport {
    let totals = fold_totals(&rows);
    FolderReport {
        folder,
        rows,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentRecord;
    use crate::pricing::ModelCosts;

    fn row(name: &str, chars: u64, tokens: u64) -> ReportRow {
        ReportRow::new(DocumentRecord {
            filename: name.to_string(),
            character_count: chars,
            token_count: tokens,
        })
    }

    #[test]
    fn empty_rows_give_zero_totals() {
        let totals = fold_totals(&[]);
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.costs, ModelCosts::default());
    }

    #[test]
    fn totals_are_exact_sums() {
        let rows = vec![row("a.md", 5, 1), row("b.md", 0, 0), row("c.md", 4000, 1234)];
        let totals = fold_totals(&rows);
        assert_eq!(totals.character_count, 4005);
        assert_eq!(totals.token_count, 1235);

        for column in 0..3 {
            let summed: u64 = rows
                .iter()
                .map(|r| r.costs.prices()[column].micros())
                .sum();
            assert_eq!(totals.costs.prices()[column].micros(), summed);
        }
    }

    #[test]
    fn totals_sum_rounded_prices_not_total_tokens() {
        // 1 token rounds to $0 under 3-small, so 100 one-token documents still total $0
        let rows: Vec<_> = (0..100).map(|i| row(&format!("{i}.md"), 1, 1)).collect();
        let totals = fold_totals(&rows);
        assert_eq!(totals.token_count, 100);
        assert_eq!(totals.costs.prices()[0].micros(), 0);
    }

    #[test]
    fn build_report_keeps_row_order() {
        let report = build_report(
            "/notes".to_string(),
            vec![row("z.md", 1, 1), row("a.md", 2, 1)],
        );
        assert_eq!(report.folder, "/notes");
        assert_eq!(report.document_count(), 2);
        assert_eq!(report.rows[0].record.filename, "z.md");
        assert_eq!(report.totals.character_count, 3);
    }
}
