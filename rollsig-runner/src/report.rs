//! Output records and the single writer for the output artifact.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metrics::{MetricsRecord, RecordStatus};

/// Version reported when a run fails before its config is loaded.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Failure record written in place of metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub version: String,
    pub status: RecordStatus,
    pub error_message: String,
}

impl ErrorRecord {
    pub fn new(version: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
            status: RecordStatus::Error,
            error_message: message.into(),
        }
    }
}

/// The one record a run writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputRecord {
    Success(MetricsRecord),
    Error(ErrorRecord),
}

impl OutputRecord {
    pub fn is_success(&self) -> bool {
        matches!(self, OutputRecord::Success(_))
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize output record")
    }

    /// Line echoed to stdout: the pretty JSON on success, `ERROR: <message>`
    /// on failure.
    pub fn console_line(&self) -> Result<String> {
        match self {
            OutputRecord::Success(_) => self.to_json_pretty(),
            OutputRecord::Error(record) => Ok(format!("ERROR: {}", record.error_message)),
        }
    }
}

/// Serialize and write the record, truncating whatever was at `path`.
/// Serialization happens first, so a failure never leaves partial output.
pub fn write_record(path: &Path, record: &OutputRecord) -> Result<()> {
    let json = record.to_json_pretty()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    Ok(())
}
