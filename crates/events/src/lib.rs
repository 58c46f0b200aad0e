//! `vetrina-events` — the session change signal.
//!
//! Two delivery paths do one logical job: a synchronous listener registry
//! for the context that performed a write, and a best-effort bus for every
//! other context of the same origin. Call sites subscribe once and never
//! learn which path fired.

pub mod bus;
pub mod change;
pub mod event;
pub mod registry;

pub use bus::{CrossContextBus, PublishError, Subscription};
pub use change::{SessionChange, SessionChanged};
pub use event::Event;
pub use registry::{ListenerRegistry, SubscriptionGuard};
