//! Table extractor
//!
//! Reads rows via GET /rest/v1/{table}?select=*&limit={ROW_LIMIT}

use super::ROW_LIMIT;
use crate::client::SupabaseClient;
use crate::etl::Extractor;
use eyre::Result;
use serde_json::Value;

/// Extractor for the first rows of one table
///
/// Rows are passed through unchanged, field order included.
///
/// # Example
/// ```no_run
/// use supabase_extractor::client::{Auth, SupabaseClient};
/// use supabase_extractor::etl::Extractor;
/// use supabase_extractor::supabase::TableExtractor;
///
/// # async fn example() -> eyre::Result<()> {
/// let client = SupabaseClient::try_new(
///     "https://your-project.supabase.co",
///     Auth::Anon("anon-key".to_string()),
/// )?;
/// let rows = TableExtractor::new(client, "projects").extract().await?;
/// # Ok(())
/// # }
/// ```
pub struct TableExtractor {
    client: SupabaseClient,
    table: String,
    limit: usize,
}

impl TableExtractor {
    /// Create an extractor that selects all columns, up to [`ROW_LIMIT`] rows
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            limit: ROW_LIMIT,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Extractor for TableExtractor {
    type Item = Value;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        let rows = self.client.select(&self.table, "*", self.limit).await?;
        log::debug!("Fetched {} row(s) from '{}'", rows.len(), self.table);
        Ok(rows)
    }
}
