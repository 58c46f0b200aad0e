//! `vetrina-auth` — credential checks and the session flows.
//!
//! Demo-grade authentication: one fixed credential pair per portal, no
//! hashing, no tokens, no server. What this crate does own is the ordering
//! contract: every flow writes the store first and emits the change signal
//! second, so no surface ever acts on a stale session.

pub mod credentials;
pub mod flow;

pub use credentials::{CredentialError, Credentials, verify_credentials};
pub use flow::{AuthFlow, FlowError, LoginOutcome, LogoutOutcome};
