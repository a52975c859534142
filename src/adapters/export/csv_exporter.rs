//! CSV roster exporter built on the `csv` crate.

use async_trait::async_trait;

use crate::domain::member::Member;
use crate::ports::{ExportError, ExportedRoster, RosterExporter};

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Role",
    "Batch",
    "Department",
    "Email",
    "Phone",
    "Join Date",
    "Status",
];

/// Writes one CSV row per member.
///
/// Fields are quoted only when they contain a delimiter, quote, or line
/// break. Join dates are written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRosterExporter;

impl CsvRosterExporter {
    pub fn new() -> Self {
        Self
    }

    fn encode(members: &[Member]) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;
        for member in members {
            let join_date = member.join_date.format("%Y-%m-%d").to_string();
            writer.write_record([
                member.id.as_str(),
                member.name.as_str(),
                member.role.as_str(),
                member.batch.as_str(),
                member.department.as_str(),
                member.email.as_str(),
                member.phone.as_str(),
                join_date.as_str(),
                member.status_label(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

#[async_trait]
impl RosterExporter for CsvRosterExporter {
    async fn export(&self, members: &[Member]) -> Result<ExportedRoster, ExportError> {
        if members.is_empty() {
            return Err(ExportError::Empty);
        }

        let content = Self::encode(members).map_err(|e| ExportError::Encoding(e.to_string()))?;
        tracing::debug!(rows = members.len(), bytes = content.len(), "Roster encoded as CSV");

        Ok(ExportedRoster {
            content,
            content_type: "text/csv; charset=utf-8",
            extension: "csv",
            rows: members.len(),
        })
    }
}
