//! Roster exporter port - tabular export of member records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::member::Member;

/// Converts members into an exportable document.
///
/// # Contract
///
/// Implementations must:
/// - Emit one header row followed by one row per member, in input order
/// - Return `ExportError::Empty` when given no members
#[async_trait]
pub trait RosterExporter: Send + Sync {
    async fn export(&self, members: &[Member]) -> Result<ExportedRoster, ExportError>;
}

/// Exported roster with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedRoster {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
    /// Number of member rows written.
    pub rows: usize,
}

impl ExportedRoster {
    /// Content as UTF-8 text, when it is text.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No data to export")]
    Empty,

    #[error("Export failed: {0}")]
    Encoding(String),
}

impl ExportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::Empty => ErrorCode::NothingToExport,
            ExportError::Encoding(_) => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_roster_as_text() {
        let doc = ExportedRoster {
            content: b"ID,Name\n".to_vec(),
            content_type: "text/csv; charset=utf-8",
            extension: "csv",
            rows: 0,
        };
        assert_eq!(doc.as_text(), Some("ID,Name\n"));
    }

    #[test]
    fn export_error_displays_and_maps() {
        assert_eq!(ExportError::Empty.to_string(), "No data to export");
        assert_eq!(ExportError::Empty.code(), ErrorCode::NothingToExport);
    }
}
