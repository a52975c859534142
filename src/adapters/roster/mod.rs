//! Roster adapters - member lookups and credentials.

mod in_memory;
mod sample;
mod yaml_file;

pub use in_memory::InMemoryRoster;
pub use sample::sample_members;
pub use yaml_file::{load_roster_file, roster_from_yaml, RosterFileError};
