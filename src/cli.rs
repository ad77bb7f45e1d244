//! CLI helper functions

use crate::{
    client::SupabaseClient,
    config::SupabaseConfig,
    etl::Extractor,
    report::{ExtractionReport, extract_source},
    storage::ReportWriter,
    supabase::{TABLES, TableExtractor, USERS_SOURCE, UsersExtractor},
};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;

/// Load Supabase client from environment variables
///
/// Expected environment variables:
/// - SUPABASE_URL (or VITE_SUPABASE_URL): project endpoint (required)
/// - SUPABASE_SERVICE_ROLE_KEY: service-role key (preferred)
/// - SUPABASE_KEY, SUPABASE_ANON_KEY or VITE_SUPABASE_ANON_KEY: anon key,
///   used when no service-role key is set
pub fn load_supabase_client() -> Result<SupabaseClient> {
    client_from_config(SupabaseConfig::from_env()?)
}

/// Build a Supabase client from loaded configuration
pub fn client_from_config(config: SupabaseConfig) -> Result<SupabaseClient> {
    log::debug!("Using {} credentials for {}", config.auth, config.url);
    if !config.auth.is_service_role() {
        log::warn!("No service-role key configured, listing users will likely be refused");
    }

    SupabaseClient::try_new(&config.url, config.auth).context("Failed to create Supabase client")
}

/// Read every table, then the user roster, into one report
///
/// Sources are read one at a time in a fixed order. A failing source is
/// recorded in the report and never stops the run.
pub async fn extract_all(client: &SupabaseClient) -> ExtractionReport {
    extract_with(
        |table| TableExtractor::new(client.clone(), table),
        &UsersExtractor::new(client.clone()),
    )
    .await
}

/// Same as [`extract_all`], with the sources supplied by the caller
///
/// `table_source` is called once per entry of [`TABLES`], in order.
pub async fn extract_with<F, T, U>(table_source: F, users: &U) -> ExtractionReport
where
    F: Fn(&str) -> T,
    T: Extractor<Item = Value>,
    U: Extractor<Item = Value>,
{
    let mut report = ExtractionReport::new();

    for table in TABLES {
        let extractor = table_source(*table);
        report.insert(*table, extract_source(table, &extractor).await);
    }

    report.insert(USERS_SOURCE, extract_source(USERS_SOURCE, users).await);

    report
}

/// Write the report to `output`, then print the summary
pub fn save_report(report: &ExtractionReport, output: impl AsRef<Path>) -> Result<()> {
    let writer = ReportWriter::new(output);
    writer.write(report)?;
    log::info!(
        "✓ Saved extracted data to {}",
        writer.path().display().bright_black()
    );

    print_summary(report);
    Ok(())
}

/// Run one extraction with an existing client
///
/// Extracts all sources, writes the report to `output` and prints the
/// summary. Only a failure to write the file is an error.
pub async fn run_with_client(
    client: &SupabaseClient,
    output: impl AsRef<Path>,
) -> Result<ExtractionReport> {
    log::info!("Extracting Supabase data from {}", client.url().bright_black());

    let report = extract_all(client).await;
    save_report(&report, output)?;

    Ok(report)
}

/// Run one extraction from loaded configuration
///
/// Returns an error, and writes nothing, if the client cannot be created.
pub async fn run_with_config(
    config: SupabaseConfig,
    output: impl AsRef<Path>,
) -> Result<ExtractionReport> {
    let client = client_from_config(config)?;
    run_with_client(&client, output).await
}

/// Run one full extraction cycle, configured from the environment
///
/// Returns an error, and writes nothing, if the configuration is missing or
/// the client cannot be created.
pub async fn run(output: impl AsRef<Path>) -> Result<ExtractionReport> {
    let client = load_supabase_client()?;
    run_with_client(&client, output).await
}

/// Print one line per source with its record count or error
pub fn print_summary(report: &ExtractionReport) {
    println!();
    println!("{}", "Summary:".bold());
    for (name, result) in report.iter() {
        match result.error() {
            Some(_) => println!("   {}: {}", name, result.red()),
            None => println!("   {}: {}", name, result.green()),
        }
    }
    if report.error_count() > 0 {
        log::warn!(
            "{} of {} source(s) failed",
            report.error_count(),
            report.len()
        );
    }
}
