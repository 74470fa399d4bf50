mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::write_report;
pub(crate) use json::output_report_json;
pub(crate) use table::print_report_table;
