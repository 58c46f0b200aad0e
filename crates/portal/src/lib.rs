//! `vetrina-portal` — audience shells and their view models.
//!
//! A shell is one mounted layout wrapper: it subscribes to the session
//! store for as long as it lives, re-reads on every change notification,
//! and exposes pure view models. Turning those into markup is a different
//! layer's problem.

pub mod header;
pub mod overlay;
pub mod shell;

pub use header::HeaderView;
pub use overlay::{GateView, OverlayAction, OverlayButton, OverlayView, VerificationGate};
pub use shell::{Audience, PortalShell, ShellView};
