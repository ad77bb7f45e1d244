//! JSON report file output

use crate::report::ExtractionReport;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};

/// Default output file, relative to the working directory
pub const OUTPUT_FILE: &str = "supabase_data_extract.json";

/// Writes an [`ExtractionReport`] as pretty-printed JSON
///
/// Output uses 2-space indentation, keeps non-ASCII characters literal and
/// ends with a newline. The file is replaced on every write.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a report the way it is written to disk
    pub fn render(report: &ExtractionReport) -> Result<String> {
        let json =
            serde_json::to_string_pretty(report).with_context(|| "Failed to serialize report")?;
        Ok(format!("{}\n", json))
    }

    /// Write the report, overwriting any previous file
    pub fn write(&self, report: &ExtractionReport) -> Result<()> {
        let content = Self::render(report)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write report file: {}", self.path.display()))?;
        log::debug!("Wrote {} source(s) to {}", report.len(), self.path.display());
        Ok(())
    }
}
