//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberReader` - Read-only roster lookups
//! - `CredentialStore` - Password hashes for member logins
//! - `SessionStore` - Persistence of the current login session
//! - `RosterExporter` - Tabular roster export

mod credential_store;
mod member_reader;
mod roster_exporter;
mod session_store;

pub use credential_store::CredentialStore;
pub use member_reader::MemberReader;
pub use roster_exporter::{ExportError, ExportedRoster, RosterExporter};
pub use session_store::SessionStore;
