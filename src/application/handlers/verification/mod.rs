//! Verification command and query handlers.

mod generate_token;
mod scan_gate;
mod verify_token;

pub use generate_token::{GenerateTokenHandler, GenerateTokenQuery};
pub use scan_gate::{ScanGate, ScanOutcome, ScanSession, DEFAULT_SCAN_COOLDOWN};
pub use verify_token::{VerifyTokenCommand, VerifyTokenHandler};
