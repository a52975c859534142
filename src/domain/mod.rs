//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `member` - Member records and the roster
//! - `verification` - QR token generation and verification
//! - `auth` - Principals and password hashing
//! - `session` - Current-identity session context

pub mod auth;
pub mod foundation;
pub mod member;
pub mod session;
pub mod verification;
