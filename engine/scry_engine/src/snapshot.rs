//! The snapshot: one evaluation cycle's complete, ordered report.

use serde::Serialize;
use std::fmt;

/// Reserved key for the single entry of a failed cycle.
pub const ERROR_KEY: &str = "error";

/// One line of the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub key: String,
    pub display: String,
}

/// The ordered result of one evaluation cycle.
///
/// Either every binding in first-appearance order, or exactly one entry
/// under the reserved [`ERROR_KEY`]. Immutable once built; each cycle's
/// snapshot fully replaces the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: Vec<ReportEntry>,
}

impl Snapshot {
    /// Build a success snapshot from already-formatted bindings.
    pub fn from_entries(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Snapshot {
            entries: pairs
                .into_iter()
                .map(|(key, display)| ReportEntry { key, display })
                .collect(),
        }
    }

    /// Build the single-entry error snapshot.
    pub fn error(message: impl Into<String>) -> Self {
        Snapshot {
            entries: vec![ReportEntry {
                key: ERROR_KEY.to_string(),
                display: message.into(),
            }],
        }
    }

    /// The report lines, in order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// True if this is the reserved error snapshot.
    pub fn is_error(&self) -> bool {
        matches!(self.entries.as_slice(), [entry] if entry.key == ERROR_KEY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Snapshot {
    /// The human-readable report: one `key: display` line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.key, entry.display)?;
        }
        Ok(())
    }
}
