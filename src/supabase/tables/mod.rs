//! PostgREST tables
//!
//! Provides the extractor for a single table, capped at [`ROW_LIMIT`] rows.

mod extractor;

pub use extractor::TableExtractor;

/// Tables read by every run, in output order
pub const TABLES: &[&str] = &["projects", "employees", "tasks", "devis", "invoices"];

/// Maximum rows fetched per table
pub const ROW_LIMIT: usize = 10;
