//! `vetrina-core` — domain foundation for the portal session engine.
//!
//! Pure types only: no storage, no signaling, no IO.

pub mod context;
pub mod role;
pub mod route;
pub mod session;
pub mod verification;

pub use context::ContextId;
pub use role::Role;
pub use route::RoutePath;
pub use session::Session;
pub use verification::{TransitionError, VerificationStatus};
