//! Admin roster handlers.

mod errors;
mod export_roster;
mod list_members;

pub use errors::RosterQueryError;
pub use export_roster::{export_filename, ExportRosterHandler, RosterExport};
pub use list_members::ListMembersHandler;
