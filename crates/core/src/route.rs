//! Route paths.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A normalized route path; always begins with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            Self(path)
        } else {
            Self(Cow::Owned(format!("/{path}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this path is `base` itself or nested underneath it.
    ///
    /// `"/admin/customers"` is within `"/admin"`; `"/administrator"` is not.
    pub fn is_within(&self, base: &str) -> bool {
        self.0 == base
            || self
                .0
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RoutePath {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_missing_leading_slash() {
        assert_eq!(RoutePath::new("home").as_str(), "/home");
        assert_eq!(RoutePath::new("/home").as_str(), "/home");
    }

    #[test]
    fn is_within_matches_base_and_children_only() {
        let path = RoutePath::new("/admin/customers");
        assert!(path.is_within("/admin"));
        assert!(RoutePath::new("/admin").is_within("/admin"));
        assert!(!RoutePath::new("/administrator").is_within("/admin"));
        assert!(!RoutePath::new("/home").is_within("/admin"));
    }
}
