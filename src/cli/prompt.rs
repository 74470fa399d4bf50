//! Interactive prompt used when no folder is given on the command line

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::AppError;

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String, AppError> {
    write!(out, "{question}").map_err(AppError::Prompt)?;
    out.flush().map_err(AppError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(AppError::Prompt)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask for the folder and report name. An empty folder answer (or EOF) is
/// an error; a blank name answer keeps `default_name`. The name is returned
/// without its line ending but otherwise untouched.
pub(crate) fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_name: &str,
) -> Result<(PathBuf, String), AppError> {
    let folder = ask(input, out, "Folder to tokenize: ")?;
    let folder = folder.trim();
    if folder.is_empty() {
        return Err(AppError::MissingFolder);
    }

    let name = ask(input, out, &format!("Output CSV file name [{default_name}]: "))?;
    let name = if name.trim().is_empty() {
        default_name.to_string()
    } else {
        name
    };

    Ok((PathBuf::from(folder), name))
}
