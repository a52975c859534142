//! LoginHandler - authenticates a member or the administrator and starts a
//! session.

use std::sync::Arc;

use crate::domain::auth::{
    placeholder_password_hash, verify_password, AdminAccount, AuthError, Principal,
};
use crate::domain::foundation::DomainError;
use crate::domain::session::{Session, SessionContext};
use crate::ports::{CredentialStore, MemberReader, SessionStore};

/// Command to log in by username or email.
#[derive(Clone)]
pub struct LoginCommand {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Handler for logins.
///
/// The administrator account is checked first, then the roster. Unknown
/// logins and wrong passwords produce the same `InvalidCredentials` error.
pub struct LoginHandler {
    members: Arc<dyn MemberReader>,
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
    admin: Option<AdminAccount>,
}

impl LoginHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            members,
            credentials,
            sessions,
            admin: None,
        }
    }

    /// Enables administrator login.
    pub fn with_admin(mut self, admin: AdminAccount) -> Self {
        self.admin = Some(admin);
        self
    }

    pub async fn handle(
        &self,
        cmd: LoginCommand,
        context: &mut SessionContext,
    ) -> Result<Session, AuthError> {
        let login = cmd.login.trim();

        let principal = match self.authenticate(login, &cmd.password).await {
            Ok(principal) => principal,
            Err(err) => {
                tracing::warn!(login = %login, error = %err, "Login failed");
                return Err(err);
            }
        };

        let session = Session::start(principal);
        self.sessions.store(&session).await.map_err(storage_error)?;
        context.store(session.clone());

        tracing::info!(
            session_id = %session.id,
            kind = session.principal.kind(),
            "Session started"
        );
        Ok(session)
    }

    async fn authenticate(&self, login: &str, password: &str) -> Result<Principal, AuthError> {
        if let Some(admin) = self.admin.as_ref().filter(|a| a.username == login) {
            return if verify_password(password, &admin.password_hash)? {
                Ok(Principal::Admin {
                    admin: admin.identity(),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            };
        }

        let member = self
            .members
            .find_by_login(login)
            .await
            .map_err(storage_error)?;

        let phc = match &member {
            Some(member) => self
                .credentials
                .password_hash(&member.id)
                .await
                .map_err(storage_error)?,
            None => None,
        };

        // One Argon2 verification on every path.
        let verified = match phc.as_deref() {
            Some(phc) => verify_password(password, phc)?,
            None => {
                if let Some(placeholder) = placeholder_password_hash() {
                    verify_password(password, placeholder)?;
                }
                false
            }
        };

        let Some(member) = member.filter(|_| verified) else {
            return Err(AuthError::InvalidCredentials);
        };
        if !member.is_active {
            return Err(AuthError::AccountInactive);
        }

        Ok(Principal::Member { member })
    }
}

fn storage_error(err: DomainError) -> AuthError {
    AuthError::service_unavailable(err.message)
}
