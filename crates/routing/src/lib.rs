//! `vetrina-routing` — route authorization and navigation tables.
//!
//! Pure decisions over `(path, session)` and `role`; no IO, no storage.
//! Route access and verification gating are deliberately decoupled: the
//! guard answers "may this route be entered", the portal overlay answers
//! "is the content interactive". An unverified partner passes the guard and
//! meets the overlay inside.

pub mod guard;
pub mod nav;
pub mod scope;

pub use guard::{RouteDecision, resolve};
pub use nav::{NavItem, Navigation, PrimaryAction, resolve_navigation};
pub use scope::{RouteScope, scope_of};
