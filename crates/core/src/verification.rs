//! Partner approval status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Approval status of an affiliate/merchant account.
///
/// Absence of a stored record reads as `Pending`. The record is never
/// deleted, only transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A transition the approval workflow does not allow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot move verification from {from} to {to}")]
    NotAllowed {
        from: VerificationStatus,
        to: VerificationStatus,
    },
}

impl VerificationStatus {
    /// The stored string form (the `verificationStatus` storage value).
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// Total parse from a stored value; anything unrecognized is `Pending`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("approved") => VerificationStatus::Approved,
            Some("rejected") => VerificationStatus::Rejected,
            Some(_) | None => VerificationStatus::Pending,
        }
    }

    /// Whether the approval workflow may move from `self` to `to`.
    ///
    /// `Pending` resolves to `Approved` or `Rejected`; a rejected account
    /// may retry back to `Pending`. `Approved` is terminal.
    pub fn can_transition_to(&self, to: VerificationStatus) -> bool {
        matches!(
            (self, to),
            (VerificationStatus::Pending, VerificationStatus::Approved)
                | (VerificationStatus::Pending, VerificationStatus::Rejected)
                | (VerificationStatus::Rejected, VerificationStatus::Pending)
        )
    }

    /// Apply a workflow transition.
    pub fn transition_to(
        self,
        to: VerificationStatus,
    ) -> Result<VerificationStatus, TransitionError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(TransitionError::NotAllowed { from: self, to })
        }
    }

    /// Next status in the demo walkthrough cycle.
    ///
    /// The cycle deliberately walks `Approved -> Rejected` (not a workflow
    /// transition) so a demo can show every overlay variant in order.
    pub fn demo_next(&self) -> VerificationStatus {
        match self {
            VerificationStatus::Pending => VerificationStatus::Approved,
            VerificationStatus::Approved => VerificationStatus::Rejected,
            VerificationStatus::Rejected => VerificationStatus::Pending,
        }
    }
}

impl core::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
