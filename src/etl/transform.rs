//! Transformer trait for reshaping extracted records

use eyre::Result;

/// Transformer trait for converting one extracted item into another
///
/// # Example
/// ```no_run
/// use supabase_extractor::etl::Transformer;
/// use eyre::Result;
/// use serde_json::Value;
///
/// struct IdOnly;
///
/// impl Transformer for IdOnly {
///     type Input = Value;
///     type Output = Value;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.get("id").cloned().unwrap_or(Value::Null))
///     }
/// }
/// ```
pub trait Transformer: Send + Sync {
    /// Input item type
    type Input: Send;

    /// Output item type after transformation
    type Output: Send;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if the input does not have the expected shape
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, preserving their order
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}
