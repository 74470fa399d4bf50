use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, ListingOrder, prompt_request};
use crate::consts::{REPORT_EXTENSION, TOKEN_ENCODING};
use crate::core::{FolderReport, account_documents};
use crate::error::AppError;
use crate::output::{output_report_json, print_report_table, write_report};
use crate::source::list_documents;
use crate::tokens::TokenCounter;
use crate::utils::debug_enabled;

/// A fully resolved run: which folder to account and where the report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunRequest {
    pub(crate) folder: PathBuf,
    pub(crate) report_name: String,
    pub(crate) order: ListingOrder,
}

/// Append `.csv` unless already present. Blank names are rejected; any
/// other name is kept exactly as given, surrounding spaces included.
pub(crate) fn normalize_report_name(name: &str) -> Result<String, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyOutputName);
    }
    if name.ends_with(REPORT_EXTENSION) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}{REPORT_EXTENSION}"))
    }
}

/// Take folder and report name from the arguments, or prompt for them on a terminal
fn resolve_request(cli: &Cli) -> Result<RunRequest, AppError> {
    let (folder, name) = match &cli.folder {
        Some(folder) => (folder.clone(), cli.output_name().to_string()),
        None => {
            let stdin = std::io::stdin();
            if !stdin.is_terminal() {
                return Err(AppError::MissingFolder);
            }
            let default_name = cli.output_name().to_string();
            prompt_request(&mut stdin.lock(), &mut std::io::stderr(), &default_name)?
        }
    };

    Ok(RunRequest {
        folder,
        report_name: normalize_report_name(&name)?,
        order: cli.listing_order(),
    })
}

/// Account the folder and write the CSV report. The report file is only
/// created once every document has been read and counted.
pub(crate) fn run(request: &RunRequest, quiet: bool) -> Result<FolderReport, AppError> {
    let start = Instant::now();
    let documents = list_documents(&request.folder, request.order)?;
    let counter = TokenCounter::from_name(TOKEN_ENCODING)?;
    if debug_enabled() {
        eprintln!("[debug] encoding: {}", counter.encoding().name());
    }

    if !quiet {
        eprintln!(
            "Scanning {} documents in {}... ({:.2}ms)",
            documents.len(),
            request.folder.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let report = account_documents(request.folder.display().to_string(), &documents, &counter)?;
    write_report(Path::new(&request.report_name), &report)?;

    if !quiet {
        eprintln!(
            "CSV file '{}' has been created with {} documents ({:.0}ms)",
            request.report_name,
            report.document_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(report)
}

/// Resolve the request, run it once, and print the summary
pub(crate) fn execute(cli: &Cli) -> Result<(), AppError> {
    let request = resolve_request(cli)?;
    let report = run(&request, cli.quiet)?;

    if cli.json {
        println!(
            "{}",
            output_report_json(&report, &request.report_name, TOKEN_ENCODING)
        );
    } else if !cli.quiet {
        print_report_table(&report, cli.use_color());
    }

    Ok(())
}
