//! Digital ID - member ID cards with verifiable QR payloads
//!
//! Members carry a QR payload binding their name, id, and role to a shared
//! secret; administrators verify presented payloads against the roster.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
