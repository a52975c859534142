//! Scan gate - debounce for continuous QR verification.
//!
//! A scanner reports the same code many times per second. The gate lets one
//! detection through, drops everything else while that verification runs,
//! and keeps dropping for a cooldown window after it completes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::verification::VerificationResult;

use super::verify_token::{VerifyTokenCommand, VerifyTokenHandler};

/// Default pause after each verification.
pub const DEFAULT_SCAN_COOLDOWN: Duration = Duration::from_millis(3000);

/// Debounce state machine. Time is passed in so the policy stays pure.
#[derive(Debug, Clone)]
pub struct ScanGate {
    cooldown: Duration,
    in_flight: bool,
    resume_at: Option<Instant>,
}

impl ScanGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            in_flight: false,
            resume_at: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// True while detections would be dropped at `now`.
    pub fn is_blocked(&self, now: Instant) -> bool {
        self.in_flight || self.resume_at.is_some_and(|resume| now < resume)
    }

    /// Admits a detection at `now`. On `true` the caller owns the single
    /// in-flight slot and must call [`ScanGate::complete`].
    pub fn try_admit(&mut self, now: Instant) -> bool {
        if self.is_blocked(now) {
            return false;
        }
        self.in_flight = true;
        self.resume_at = None;
        true
    }

    /// Releases the in-flight slot and starts the cooldown at `now`.
    pub fn complete(&mut self, now: Instant) {
        self.in_flight = false;
        self.resume_at = Some(now + self.cooldown);
    }
}

impl Default for ScanGate {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_COOLDOWN)
    }
}

/// What happened to one detection.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Verified(VerificationResult),
    Dropped,
}

/// Feeds detections through a [`ScanGate`] into the verifier.
pub struct ScanSession {
    handler: VerifyTokenHandler,
    gate: Mutex<ScanGate>,
    verified: AtomicU64,
    dropped: AtomicU64,
}

impl ScanSession {
    pub fn new(handler: VerifyTokenHandler, cooldown: Duration) -> Self {
        Self {
            handler,
            gate: Mutex::new(ScanGate::new(cooldown)),
            verified: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    /// Handles one detected payload.
    pub async fn on_detection(&self, payload: &str) -> ScanOutcome {
        let admitted = self
            .gate
            .lock()
            .map(|mut gate| gate.try_admit(Instant::now()))
            .unwrap_or(false);

        if !admitted {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Detection dropped by scan gate");
            return ScanOutcome::Dropped;
        }

        let result = self.handler.handle(VerifyTokenCommand::new(payload)).await;

        if let Ok(mut gate) = self.gate.lock() {
            gate.complete(Instant::now());
        }
        self.verified.fetch_add(1, Ordering::Relaxed);
        ScanOutcome::Verified(result)
    }

    /// `(verified, dropped)` detection counts so far.
    pub fn counts(&self) -> (u64, u64) {
        (
            self.verified.load(Ordering::Relaxed),
            self.dropped.load(Ordering::Relaxed),
        )
    }
}
