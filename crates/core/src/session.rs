//! The session value: authentication flag plus role.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Authentication state for one browser origin.
///
/// # Invariants
/// - A non-guest role implies an authenticated session (enforced by
///   [`Session::normalized`]).
/// - The converse (`is_authenticated` with `role == Guest`) is deliberately
///   left unresolved; the source never defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Role,
}

impl Session {
    /// The fail-safe default: signed out, `Guest`.
    pub fn guest() -> Self {
        Self {
            is_authenticated: false,
            role: Role::Guest,
        }
    }

    /// An authenticated session for `role`.
    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
        }
    }

    /// Re-establish the enforced invariant.
    ///
    /// A stored role without the authentication flag is drift; it demotes to
    /// `Guest` rather than upgrading the flag, so drift can never grant
    /// access. An authenticated guest is left as-is.
    pub fn normalized(self) -> Self {
        if !self.is_authenticated && self.role != Role::Guest {
            Self {
                role: Role::Guest,
                ..self
            }
        } else {
            self
        }
    }

    pub fn is_guest(&self) -> bool {
        !self.is_authenticated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_demotes_unauthenticated_roles() {
        let drifted = Session {
            is_authenticated: false,
            role: Role::Admin,
        };
        assert_eq!(drifted.normalized(), Session::guest());
    }

    #[test]
    fn normalization_leaves_consistent_sessions_alone() {
        let session = Session::authenticated(Role::Merchant);
        assert_eq!(session.normalized(), session);

        // The unresolved combination passes through untouched.
        let authenticated_guest = Session {
            is_authenticated: true,
            role: Role::Guest,
        };
        assert_eq!(authenticated_guest.normalized(), authenticated_guest);
    }
}
