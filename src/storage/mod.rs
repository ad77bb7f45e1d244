//! File system storage operations
//!
//! A run persists exactly one artifact: the JSON report file.

mod report_file;

pub use report_file::{OUTPUT_FILE, ReportWriter};
