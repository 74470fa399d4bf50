/// Only entries whose file name ends with this suffix are counted
pub(crate) const DOCUMENT_EXTENSION: &str = ".md";

/// Tokenization scheme used for every document
pub(crate) const TOKEN_ENCODING: &str = "cl100k_base";

/// Report name used when none is given
pub(crate) const DEFAULT_OUTPUT_NAME: &str = "output";

pub(crate) const REPORT_EXTENSION: &str = ".csv";
