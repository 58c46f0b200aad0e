//! Roles and the canonical home-route table.

use serde::{Deserialize, Serialize};

use crate::route::RoutePath;

/// Portal role.
///
/// `Guest` is the implicit role of an unauthenticated session. The set is
/// closed on purpose: every stored value outside the four real role strings
/// reads as `Guest`, so storage drift can never grant access or lock a user
/// out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    User,
    Merchant,
    Affiliate,
    Admin,
}

impl Role {
    /// The stored string form (the `userRole` storage value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Merchant => "merchant",
            Role::Affiliate => "affiliate",
            Role::Admin => "admin",
        }
    }

    /// Total parse from a stored value.
    ///
    /// Absent, empty, and unrecognized values all map to `Guest`; this is a
    /// fail-safe default, never an error.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("user") => Role::User,
            Some("merchant") => Role::Merchant,
            Some("affiliate") => Role::Affiliate,
            Some("admin") => Role::Admin,
            Some(_) | None => Role::Guest,
        }
    }

    /// Canonical home route for the role.
    pub fn home_route(&self) -> RoutePath {
        match self {
            Role::Admin => RoutePath::new("/admin"),
            Role::Merchant => RoutePath::new("/merchants"),
            Role::Affiliate => RoutePath::new("/affiliate/dashboard"),
            Role::User => RoutePath::new("/home"),
            Role::Guest => RoutePath::new("/"),
        }
    }

    /// Whether this role consults a verification record inside the partner
    /// portal.
    pub fn is_verification_subject(&self) -> bool {
        matches!(self, Role::Affiliate | Role::Merchant)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
