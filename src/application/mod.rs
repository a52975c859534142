//! Use cases: one handler per command or query, wired to ports.

pub mod handlers;

pub use handlers::{
    // Verification handlers
    GenerateTokenHandler, GenerateTokenQuery, ScanGate, ScanOutcome, ScanSession,
    VerifyTokenCommand, VerifyTokenHandler,
    // Session handlers
    CurrentSessionHandler, LoginCommand, LoginHandler, LogoutHandler,
    // Roster handlers
    ExportRosterHandler, ListMembersHandler, RosterExport, RosterQueryError,
};
