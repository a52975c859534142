//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod roster;
pub mod session;
pub mod verification;

pub use roster::{export_filename, ExportRosterHandler, ListMembersHandler, RosterExport, RosterQueryError};
pub use session::{CurrentSessionHandler, LoginCommand, LoginHandler, LogoutHandler};
pub use verification::{
    GenerateTokenHandler, GenerateTokenQuery, ScanGate, ScanOutcome, ScanSession, VerifyTokenCommand,
    VerifyTokenHandler, DEFAULT_SCAN_COOLDOWN,
};
