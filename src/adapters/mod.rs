//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `roster` - Embedded sample roster and YAML roster files
//! - `session` - In-memory and JSON-file session stores
//! - `export` - CSV roster export

pub mod export;
pub mod roster;
pub mod session;

pub use export::CsvRosterExporter;
pub use roster::{load_roster_file, sample_members, InMemoryRoster, RosterFileError};
pub use session::{InMemorySessionStore, JsonFileSessionStore};
