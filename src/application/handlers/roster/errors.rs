//! Errors for admin roster handlers.

use thiserror::Error;

use crate::domain::auth::AuthError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ExportError;

#[derive(Debug, Clone, Error)]
pub enum RosterQueryError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl RosterQueryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterQueryError::Auth(e) => e.code(),
            RosterQueryError::Export(e) => e.code(),
            RosterQueryError::Storage(e) => e.code,
        }
    }
}
