//! Login, logout, registration, and explicit role assignment.
//!
//! Each flow writes the store first and emits second; the emit returns only
//! after every same-context listener has run (see `vetrina-events`), so a
//! redirect computed after a flow call can never observe the old session.

use serde::{Deserialize, Serialize};

use vetrina_core::{Role, RoutePath, Session};
use vetrina_events::SessionChange;
use vetrina_session::{SessionStore, StorageError};

use crate::credentials::{CredentialError, Credentials, verify_credentials};

/// Flow failure: either the credentials were wrong (recoverable, shown
/// inline) or the durable write itself failed.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub session: Session,
    /// Echoed back from the caller; navigation happens only when a
    /// destination was supplied.
    pub redirect: Option<RoutePath>,
}

/// Result of a logout: always lands on the guest home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutOutcome {
    pub redirect: RoutePath,
}

/// The authentication flows for one browsing context.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    store: SessionStore,
}

impl AuthFlow {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Sign in with a fixed demo credential pair.
    ///
    /// On success both session keys are written, then the change signal is
    /// emitted exactly once. On failure the session is untouched and no
    /// signal fires.
    pub fn login(
        &self,
        credentials: &Credentials,
        redirect: Option<RoutePath>,
    ) -> Result<LoginOutcome, FlowError> {
        let role = verify_credentials(credentials)?;
        let session = Session::authenticated(role);

        self.store.set(&session)?;
        self.store.emit(SessionChange::LoggedIn { role });

        tracing::info!(role = %role, "login succeeded");

        Ok(LoginOutcome { session, redirect })
    }

    /// Demo signup: creates the session immediately.
    ///
    /// Defaults to a shopper account; the partner signup pages request their
    /// portal role explicitly.
    pub fn register(&self, requested_role: Option<Role>) -> Result<LoginOutcome, FlowError> {
        let role = requested_role.unwrap_or(Role::User);
        let session = Session::authenticated(role);

        self.store.set(&session)?;
        self.store.emit(SessionChange::LoggedIn { role });

        tracing::info!(role = %role, "registration completed");

        Ok(LoginOutcome {
            session,
            redirect: None,
        })
    }

    /// Sign out: remove both session keys, notify every mounted surface,
    /// then land on the guest home.
    ///
    /// Listeners run before the outcome (and its redirect) exists, so no
    /// redirect target is ever computed from a stale session.
    pub fn logout(&self) -> Result<LogoutOutcome, FlowError> {
        self.store.clear()?;
        self.store.emit(SessionChange::LoggedOut);

        tracing::info!("logout completed");

        Ok(LogoutOutcome {
            redirect: Role::Guest.home_route(),
        })
    }

    /// Explicit role assignment for an already-established session.
    pub fn assign_role(&self, role: Role) -> Result<Session, FlowError> {
        let session = Session::authenticated(role);

        self.store.set(&session)?;
        self.store.emit(SessionChange::RoleAssigned { role });

        tracing::info!(role = %role, "role assigned");

        Ok(session)
    }
}
