pub mod recorder_error;
pub mod spreadsheet;
