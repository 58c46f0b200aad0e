//! Header view model.

use serde::{Deserialize, Serialize};

use vetrina_core::{RoutePath, Session};
use vetrina_routing::{Navigation, resolve_navigation};

/// Everything a mounted header needs to render.
///
/// Recomputed from the session on every change notification; headers keep
/// no session state of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    pub authenticated: bool,
    /// Where the brand logo points: the session role's home.
    pub brand_home: RoutePath,
    pub navigation: Navigation,
}

impl HeaderView {
    pub fn for_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated,
            brand_home: session.role.home_route(),
            navigation: resolve_navigation(session.role),
        }
    }
}
