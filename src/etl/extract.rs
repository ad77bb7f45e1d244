//! Extractor trait for pulling records from a source

use eyre::Result;

/// Extractor trait for extracting records from a source
///
/// Implementors define how to fetch items from sources like:
/// - PostgREST tables
/// - The auth admin users listing
///
/// # Example
/// ```no_run
/// use supabase_extractor::etl::Extractor;
/// use eyre::Result;
/// use serde_json::Value;
///
/// struct FixedRows(Vec<Value>);
///
/// impl Extractor for FixedRows {
///     type Item = Value;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract items from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, permissions, parsing, etc.)
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
