//! Member domain module.
//!
//! - `record` - Member identity record
//! - `roster` - Read-only roster indexed by member id

mod record;
mod roster;

pub use record::Member;
pub use roster::{Roster, RosterError};
