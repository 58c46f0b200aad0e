//! Route authorization.
//!
//! One authority for every portal shell; the layouts consume the decision,
//! they never re-derive it.

use serde::{Deserialize, Serialize};

use vetrina_core::{RoutePath, Session};

use crate::scope::scope_of;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    Allow,
    Redirect {
        to: RoutePath,
        /// Set when an unauthenticated visitor was bounced to the login
        /// surface: the path to resume once they sign in.
        resume_after_login: Option<RoutePath>,
    },
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }
}

/// Decide whether `session` may enter `path`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Signed out on a protected route bounces to the login surface with the
/// attempted path remembered; a wrong role bounces to that role's canonical
/// home. Verification state is deliberately not consulted here: an
/// unverified partner may enter the portal and meets the overlay inside.
pub fn resolve(path: &RoutePath, session: &Session) -> RouteDecision {
    let scope = scope_of(path);

    if !scope.requires_authentication() {
        return RouteDecision::Allow;
    }

    if !session.is_authenticated {
        tracing::debug!(path = %path, "unauthenticated, redirecting to login");
        return RouteDecision::Redirect {
            to: RoutePath::new("/"),
            resume_after_login: Some(path.clone()),
        };
    }

    if !scope.admits(session.role) {
        let home = session.role.home_route();
        tracing::debug!(path = %path, role = %session.role, to = %home, "role mismatch, redirecting home");
        return RouteDecision::Redirect {
            to: home,
            resume_after_login: None,
        };
    }

    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vetrina_core::Role;

    use crate::scope::{RouteScope, scope_of};

    #[test]
    fn guests_are_sent_to_login_with_the_path_remembered() {
        let attempt = RoutePath::new("/wishlist");
        let decision = resolve(&attempt, &Session::guest());

        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: RoutePath::new("/"),
                resume_after_login: Some(attempt),
            }
        );
    }

    #[test]
    fn wrong_role_is_sent_to_its_own_home() {
        let merchant = Session::authenticated(Role::Merchant);
        let decision = resolve(&RoutePath::new("/admin"), &merchant);

        // A merchant probing the admin portal lands on /merchants, not /admin.
        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: RoutePath::new("/merchants"),
                resume_after_login: None,
            }
        );
    }

    #[test]
    fn matching_roles_are_allowed() {
        for (path, role) in [
            ("/home", Role::User),
            ("/merchants/products", Role::Merchant),
            ("/admin/customers", Role::Admin),
            ("/affiliate/dashboard", Role::Affiliate),
            ("/dashboard/analytics", Role::Admin),
            ("/dashboard/products", Role::Merchant),
        ] {
            let decision = resolve(&RoutePath::new(path), &Session::authenticated(role));
            assert!(decision.is_allowed(), "{role} should enter {path}");
        }
    }

    #[test]
    fn unverified_partners_still_pass_the_guard() {
        // Verification gating is the portal overlay's job, not the guard's.
        for role in [Role::Affiliate, Role::Merchant] {
            let decision = resolve(
                &RoutePath::new("/affiliate/dashboard"),
                &Session::authenticated(role),
            );
            assert!(decision.is_allowed());
        }
    }

    #[test]
    fn public_surfaces_never_redirect() {
        for path in ["/", "/signup", "/affiliate/login", "/merchant/signup"] {
            assert!(resolve(&RoutePath::new(path), &Session::guest()).is_allowed());
            assert!(
                resolve(
                    &RoutePath::new(path),
                    &Session::authenticated(Role::Admin)
                )
                .is_allowed()
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        /// Property: a guest session is never allowed onto a route that
        /// requires authentication, whatever the path looks like.
        #[test]
        fn guests_never_enter_protected_routes(path in "/[a-z0-9/-]{0,40}") {
            let path = RoutePath::new(path);
            let decision = resolve(&path, &Session::guest());

            if scope_of(&path).requires_authentication() {
                prop_assert!(!decision.is_allowed());
            } else {
                prop_assert!(decision.is_allowed());
            }
        }

        /// Property: every redirect for an authenticated session targets the
        /// session role's canonical home.
        #[test]
        fn authenticated_redirects_land_on_the_canonical_home(
            path in "/[a-z0-9/-]{0,40}",
            role_index in 0usize..4,
        ) {
            let role = [Role::User, Role::Merchant, Role::Affiliate, Role::Admin][role_index];
            let session = Session::authenticated(role);

            if let RouteDecision::Redirect { to, resume_after_login } =
                resolve(&RoutePath::new(path), &session)
            {
                prop_assert_eq!(to, role.home_route());
                prop_assert_eq!(resume_after_login, None);
            }
        }
    }

    // Keep the proptest string strategy honest: it must be able to produce
    // scoped paths at all.
    #[test]
    fn sample_scoped_paths_are_reachable_by_the_strategy_alphabet() {
        assert_eq!(scope_of(&RoutePath::new("/admin/x")), RouteScope::Admin);
        assert_eq!(
            scope_of(&RoutePath::new("/merchants/x")),
            RouteScope::Merchant
        );
    }
}
