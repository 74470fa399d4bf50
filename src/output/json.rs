use serde_json::{Map, Value, json};

use crate::core::FolderReport;
use crate::pricing::ModelCosts;

fn costs_json(costs: &ModelCosts) -> Value {
    let map: Map<String, Value> = costs
        .iter()
        .map(|(model, price)| (model.to_string(), json!(price.as_dollars())))
        .collect();
    Value::Object(map)
}

/// Summary of a run for programmatic consumption
pub(crate) fn output_report_json(report: &FolderReport, report_path: &str, encoding: &str) -> String {
    let documents: Vec<Value> = report
        .rows
        .iter()
        .map(|row| {
            json!({
                "filename": row.record.filename,
                "characters": row.record.character_count,
                "tokens": row.record.token_count,
                "costs": costs_json(&row.costs),
            })
        })
        .collect();

    let output = json!({
        "folder": report.folder,
        "report": report_path,
        "encoding": encoding,
        "documents": documents,
        "totals": {
            "characters": report.totals.character_count,
            "tokens": report.totals.token_count,
            "costs": costs_json(&report.totals.costs),
        },
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DocumentRecord, ReportRow, Totals};

    #[test]
    fn json_structure() {
        let row = ReportRow::new(DocumentRecord {
            filename: "a.md".to_string(),
            character_count: 5,
            token_count: 1000,
        });
        let mut totals = Totals::default();
        totals.add(&row);
        let report = FolderReport {
            folder: "notes".to_string(),
            rows: vec![row],
            totals,
        };

        let out = output_report_json(&report, "output.csv", "cl100k_base");
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["folder"], "notes");
        assert_eq!(value["report"], "output.csv");
        assert_eq!(value["encoding"], "cl100k_base");
        assert_eq!(value["documents"][0]["filename"], "a.md");
        assert_eq!(value["documents"][0]["tokens"], 1000);
        assert_eq!(
            value["documents"][0]["costs"]["text-embedding-3-large"].as_f64(),
            Some(0.00013)
        );
        assert_eq!(value["totals"]["characters"], 5);
        assert_eq!(value["totals"]["costs"]["text-embedding-ada-002"].as_f64(), Some(0.0001));
    }
}
