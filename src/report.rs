//! Per-source outcomes and the report assembled from them

use crate::etl::Extractor;
use eyre::Result;
use owo_colors::OwoColorize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Outcome of reading one source
///
/// A failed source always reports zero records and no data.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceResult {
    Fetched(Vec<Value>),
    Failed(String),
}

impl SourceResult {
    /// Record the outcome of a fetch. A failure keeps its whole cause chain,
    /// outermost context first.
    pub fn capture(result: Result<Vec<Value>>) -> Self {
        match result {
            Ok(data) => Self::Fetched(data),
            Err(e) => Self::Failed(format!("{:#}", e)),
        }
    }

    pub fn count(&self) -> usize {
        self.data().len()
    }

    pub fn data(&self) -> &[Value] {
        match self {
            Self::Fetched(data) => data,
            Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Fetched(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl std::fmt::Display for SourceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetched(data) => write!(f, "✓ {} records", data.len()),
            Self::Failed(e) => write!(f, "✗ {}", e),
        }
    }
}

impl Serialize for SourceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fetched(data) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("count", &data.len())?;
                map.serialize_entry("data", data)?;
                map.end()
            }
            Self::Failed(error) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("error", error)?;
                map.serialize_entry("count", &0)?;
                map.serialize_entry("data", &[] as &[Value])?;
                map.end()
            }
        }
    }
}

/// Source name to outcome, in the order sources were read
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractionReport {
    entries: Vec<(String, SourceResult)>,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source's outcome. A repeated name replaces the earlier outcome
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, result: SourceResult) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = result,
            None => self.entries.push((name, result)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SourceResult> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceResult)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Number of sources that failed
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_error()).count()
    }
}

impl Serialize for ExtractionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

/// Read one source, turning any failure into a [`SourceResult::Failed`]
pub async fn extract_source<E>(name: &str, extractor: &E) -> SourceResult
where
    E: Extractor<Item = Value>,
{
    log::info!("Extracting {}...", name.cyan());
    let result = SourceResult::capture(extractor.extract().await);
    match &result {
        SourceResult::Fetched(data) => log::info!("  ✓ {} record(s) found", data.len()),
        SourceResult::Failed(e) => log::warn!("  ✗ Failed to extract '{}': {}", name, e),
    }
    result
}
