//! Supabase Extractor
//!
//! Reads the first rows of a fixed set of tables plus the auth user roster
//! from a Supabase project and saves them as one JSON report.

pub mod cli;
pub mod client;
pub mod config;
pub mod etl;
pub mod report;
pub mod storage;
pub mod supabase;

// Re-exports for convenience
pub use client::{Auth, SupabaseClient};
pub use config::SupabaseConfig;
pub use etl::{Extractor, Transformer};
pub use report::{ExtractionReport, SourceResult};
pub use storage::ReportWriter;
pub use supabase::{TableExtractor, UserRecord, UserRecordMapper, UsersExtractor};
