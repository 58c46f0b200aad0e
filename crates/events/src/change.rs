//! The one event this engine broadcasts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vetrina_core::{ContextId, Role, VerificationStatus};

use crate::event::Event;

/// What changed in the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionChange {
    LoggedIn { role: Role },
    LoggedOut,
    RoleAssigned { role: Role },
    VerificationChanged { status: VerificationStatus },
}

/// Notification emitted after every session-store write.
///
/// `origin` names the browsing context that performed the write; the
/// cross-context bus uses it to skip the writer on fan-out. Consumers should
/// re-read the store rather than trusting the payload: the store is the
/// source of truth and writes are last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionChanged {
    pub origin: ContextId,
    pub change: SessionChange,
    pub occurred_at: DateTime<Utc>,
}

impl SessionChanged {
    pub fn now(origin: ContextId, change: SessionChange) -> Self {
        Self {
            origin,
            change,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for SessionChanged {
    fn event_type(&self) -> &'static str {
        match self.change {
            SessionChange::LoggedIn { .. } => "session.logged_in",
            SessionChange::LoggedOut => "session.logged_out",
            SessionChange::RoleAssigned { .. } => "session.role_assigned",
            SessionChange::VerificationChanged { .. } => "session.verification_changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_are_stable_per_change_kind() {
        let origin = ContextId::new();
        assert_eq!(
            SessionChanged::now(origin, SessionChange::LoggedIn { role: Role::User }).event_type(),
            "session.logged_in"
        );
        assert_eq!(
            SessionChanged::now(origin, SessionChange::LoggedOut).event_type(),
            "session.logged_out"
        );
        assert_eq!(
            SessionChanged::now(
                origin,
                SessionChange::VerificationChanged {
                    status: VerificationStatus::Approved
                }
            )
            .event_type(),
            "session.verification_changed"
        );
    }
}
