//! Member record - the identity a digital ID card represents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

/// A roster member.
///
/// Field names serialize in camelCase to stay compatible with roster files
/// and verification output consumed by existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique roster identifier.
    pub id: MemberId,

    /// Login name.
    pub username: String,

    /// Display name printed on the card.
    pub name: String,

    /// Team or position, free text (e.g. "Core Team").
    pub role: String,

    /// Batch / cohort label (e.g. "2024").
    pub batch: String,

    pub department: String,

    pub email: String,

    pub phone: String,

    /// Date the member joined, `YYYY-MM-DD`.
    pub join_date: NaiveDate,

    /// Inactive members cannot log in and are left out of listings,
    /// but are still resolvable by id.
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl Member {
    /// Returns true if `login` names this member by username or email.
    pub fn matches_login(&self, login: &str) -> bool {
        self.username == login || self.email == login
    }

    /// Status label used in listings and exports.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Join date formatted for display, e.g. "January 15, 2024".
    pub fn join_date_display(&self) -> String {
        self.join_date.format("%B %-d, %Y").to_string()
    }
}

fn default_active() -> bool {
    true
}
