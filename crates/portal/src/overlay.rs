//! The partner verification gate.
//!
//! Display-only: the portal content stays mounted and running underneath.
//! Anything short of `Approved` suppresses interaction (blur plus pointer
//! blocking) and puts a status-selected overlay on top. Route access is the
//! guard's job, never this gate's.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use vetrina_core::VerificationStatus;

/// What an overlay button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayAction {
    /// Navigate to the portal support page.
    ContactSupport,
    /// Close the overlay for this render; the content underneath is already
    /// mounted.
    Dismiss,
    /// Walk the demo cycle to the next status.
    DemoAdvance,
}

/// One overlay button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayButton {
    pub label: Cow<'static, str>,
    pub action: OverlayAction,
}

impl OverlayButton {
    fn new(label: &'static str, action: OverlayAction) -> Self {
        Self {
            label: Cow::Borrowed(label),
            action,
        }
    }
}

/// Reasons shown on a rejected verification.
pub const REJECTION_REASONS: &[&str] = &[
    "Incomplete personal information",
    "Invalid business details",
    "Mismatch in provided documentation",
];

/// The modal content for one verification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayView {
    pub status: VerificationStatus,
    pub title: Cow<'static, str>,
    pub body: Vec<Cow<'static, str>>,
    /// Itemized reasons; populated only for a rejection.
    pub reasons: Vec<Cow<'static, str>>,
    pub buttons: Vec<OverlayButton>,
}

impl OverlayView {
    /// Build the overlay variant for `status`.
    pub fn for_status(status: VerificationStatus) -> Self {
        match status {
            VerificationStatus::Pending => Self {
                status,
                title: Cow::Borrowed("Verification Pending"),
                body: vec![
                    Cow::Borrowed(
                        "Your partner account is currently under review. \
                         This usually takes 1-2 business days.",
                    ),
                    Cow::Borrowed("We'll notify you once the verification is complete."),
                ],
                reasons: Vec::new(),
                buttons: vec![
                    OverlayButton::new("Contact Support", OverlayAction::ContactSupport),
                    OverlayButton::new("Demo: Approve Account", OverlayAction::DemoAdvance),
                ],
            },
            VerificationStatus::Approved => Self {
                status,
                title: Cow::Borrowed("Verification Approved"),
                body: vec![
                    Cow::Borrowed(
                        "Your account has been verified! You now have full access \
                         to the partner portal.",
                    ),
                    Cow::Borrowed("Start creating links and earning commissions."),
                ],
                reasons: Vec::new(),
                buttons: vec![OverlayButton::new(
                    "Continue to Dashboard",
                    OverlayAction::Dismiss,
                )],
            },
            VerificationStatus::Rejected => Self {
                status,
                title: Cow::Borrowed("Verification Failed"),
                body: vec![Cow::Borrowed(
                    "Unfortunately, we couldn't verify your account due to the \
                     following reasons:",
                )],
                reasons: REJECTION_REASONS.iter().map(|r| Cow::Borrowed(*r)).collect(),
                buttons: vec![
                    OverlayButton::new("Contact Support", OverlayAction::ContactSupport),
                    OverlayButton::new("Demo: Reset Status", OverlayAction::DemoAdvance),
                ],
            },
        }
    }
}

/// How the portal content renders under a given verification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateView {
    /// Content is always mounted; this flag is interactivity, not presence.
    pub interactive: bool,
    pub blurred: bool,
    pub overlay: Option<OverlayView>,
}

impl GateView {
    /// Whether the gate is currently suppressing interaction.
    pub fn is_blocking(&self) -> bool {
        !self.interactive
    }
}

/// Per-shell gate state: the per-render dismissal for the approved
/// congratulation. The status itself lives in the store, never here.
#[derive(Debug, Clone, Default)]
pub struct VerificationGate {
    dismissed: bool,
}

impl VerificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss the current overlay for this render.
    ///
    /// Only meaningful once approved; pending and rejected overlays return
    /// on the next view regardless.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Recompute the gate for `status`.
    pub fn view(&mut self, status: VerificationStatus) -> GateView {
        match status {
            VerificationStatus::Approved => {
                let overlay = if self.dismissed {
                    None
                } else {
                    Some(OverlayView::for_status(status))
                };
                GateView {
                    interactive: true,
                    blurred: false,
                    overlay,
                }
            }
            VerificationStatus::Pending | VerificationStatus::Rejected => {
                // Leaving the approved state re-arms the congratulation.
                self.dismissed = false;
                GateView {
                    interactive: false,
                    blurred: true,
                    overlay: Some(OverlayView::for_status(status)),
                }
            }
        }
    }
}
