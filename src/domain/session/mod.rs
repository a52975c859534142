//! Session domain module.
//!
//! Holds the current authenticated identity of a client explicitly instead
//! of in ambient globals.

mod context;

pub use context::{Session, SessionContext};
