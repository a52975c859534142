//! ExportRosterHandler - downloads the active roster as a file.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;
use crate::domain::session::SessionContext;
use crate::ports::{ExportedRoster, MemberReader, RosterExporter};

use super::errors::RosterQueryError;

/// An exported roster and its suggested file name.
#[derive(Debug, Clone)]
pub struct RosterExport {
    pub filename: String,
    pub document: ExportedRoster,
}

/// Suggested export file name, e.g. `members_2024-03-01.csv`.
pub fn export_filename(date: NaiveDate, extension: &str) -> String {
    format!("members_{}.{}", date.format("%Y-%m-%d"), extension)
}

/// Exports active members. Admin only.
pub struct ExportRosterHandler {
    members: Arc<dyn MemberReader>,
    exporter: Arc<dyn RosterExporter>,
}

impl ExportRosterHandler {
    pub fn new(members: Arc<dyn MemberReader>, exporter: Arc<dyn RosterExporter>) -> Self {
        Self { members, exporter }
    }

    pub async fn handle(&self, context: &SessionContext) -> Result<RosterExport, RosterQueryError> {
        let admin = context.require_admin()?;
        let members = self.members.list_active().await?;
        let document = self.exporter.export(&members).await?;
        let filename = export_filename(Timestamp::now().date(), document.extension);

        tracing::info!(
            admin = %admin.username,
            rows = document.rows,
            filename = %filename,
            "Roster exported"
        );
        Ok(RosterExport { filename, document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::CsvRosterExporter;
    use crate::adapters::roster::{sample_members, InMemoryRoster};
    use crate::domain::auth::{AdminAccount, Principal};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::member::Member;
    use crate::domain::session::Session;

    fn admin_context() -> SessionContext {
        SessionContext::from_session(Some(Session::start(Principal::Admin {
            admin: AdminAccount::new("admin", "Admin User", "$argon2id$x").identity(),
        })))
    }

    fn handler(members: Vec<Member>) -> ExportRosterHandler {
        ExportRosterHandler::new(
            Arc::new(InMemoryRoster::from_members(members).unwrap()),
            Arc::new(CsvRosterExporter::new()),
        )
    }

    #[test]
    fn filename_carries_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(export_filename(date, "csv"), "members_2024-03-01.csv");
    }

    #[tokio::test]
    async fn exports_active_members_as_csv() {
        let mut members = sample_members();
        members[1].is_active = false;

        let export = handler(members).handle(&admin_context()).await.unwrap();

        assert!(export.filename.starts_with("members_"));
        assert!(export.filename.ends_with(".csv"));
        assert_eq!(export.document.rows, 4);
        assert!(!export.document.as_text().unwrap().contains("SEDS2024002"));
    }

    #[tokio::test]
    async fn empty_roster_has_nothing_to_export() {
        let err = handler(vec![]).handle(&admin_context()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NothingToExport);
        assert_eq!(err.to_string(), "No data to export");
    }

    #[tokio::test]
    async fn all_inactive_roster_has_nothing_to_export() {
        let members = sample_members()
            .into_iter()
            .map(|mut m| {
                m.is_active = false;
                m
            })
            .collect();
        let err = handler(members).handle(&admin_context()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NothingToExport);
    }

    #[tokio::test]
    async fn requires_admin() {
        let err = handler(sample_members())
            .handle(&SessionContext::anonymous())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
