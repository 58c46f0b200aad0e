//! Which role(s) a route is scoped to.

use vetrina_core::{Role, RoutePath};

/// Authorization scope of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteScope {
    /// Reachable signed out: the login surface and the signup pages.
    Public,
    /// Shopper storefront.
    Shopper,
    /// Merchant portal (`/merchants/*`).
    Merchant,
    /// Admin back office (`/admin/*`).
    Admin,
    /// Affiliate portal; merchants are admitted here as well.
    Partner,
    /// Management dashboard shared by admin and merchant.
    Dashboard,
}

/// Surfaces that work signed out. `/affiliate/login` and friends must be
/// listed here because they live under an otherwise role-scoped prefix.
const PUBLIC_ROUTES: &[&str] = &[
    "/",
    "/signup",
    "/merchant/login",
    "/merchant/signup",
    "/affiliate/login",
    "/affiliate/signup",
];

/// Shopper routes are a closed list, not a prefix.
const SHOPPER_ROUTES: &[&str] = &[
    "/home",
    "/categories",
    "/try-on",
    "/about",
    "/contact",
    "/pricing",
    "/profile",
    "/orders",
    "/wishlist",
];

/// Classify a path.
///
/// Unknown paths fall back to `Public`: navigation to a route nobody
/// registered is a not-found concern, not an authorization one.
pub fn scope_of(path: &RoutePath) -> RouteScope {
    if PUBLIC_ROUTES.contains(&path.as_str()) {
        return RouteScope::Public;
    }
    if path.is_within("/admin") {
        return RouteScope::Admin;
    }
    if path.is_within("/merchants") {
        return RouteScope::Merchant;
    }
    if path.is_within("/affiliate") {
        return RouteScope::Partner;
    }
    if path.is_within("/dashboard") {
        return RouteScope::Dashboard;
    }
    if SHOPPER_ROUTES.contains(&path.as_str()) || path.is_within("/try-on") {
        return RouteScope::Shopper;
    }
    RouteScope::Public
}

impl RouteScope {
    /// Whether the scope requires an authenticated session at all.
    pub fn requires_authentication(&self) -> bool {
        !matches!(self, RouteScope::Public)
    }

    /// Whether `role` may enter routes of this scope.
    pub fn admits(&self, role: Role) -> bool {
        match self {
            RouteScope::Public => true,
            RouteScope::Shopper => matches!(role, Role::User),
            RouteScope::Merchant => matches!(role, Role::Merchant),
            RouteScope::Admin => matches!(role, Role::Admin),
            RouteScope::Partner => matches!(role, Role::Affiliate | Role::Merchant),
            RouteScope::Dashboard => matches!(role, Role::Admin | Role::Merchant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_surfaces_under_scoped_prefixes_stay_public() {
        assert_eq!(
            scope_of(&RoutePath::new("/affiliate/login")),
            RouteScope::Public
        );
        assert_eq!(
            scope_of(&RoutePath::new("/merchant/signup")),
            RouteScope::Public
        );
        // But the portal itself is not.
        assert_eq!(
            scope_of(&RoutePath::new("/affiliate/dashboard")),
            RouteScope::Partner
        );
    }

    #[test]
    fn prefixes_cover_nested_routes() {
        assert_eq!(
            scope_of(&RoutePath::new("/admin/customers")),
            RouteScope::Admin
        );
        assert_eq!(
            scope_of(&RoutePath::new("/merchants/billing")),
            RouteScope::Merchant
        );
        assert_eq!(
            scope_of(&RoutePath::new("/dashboard/analytics")),
            RouteScope::Dashboard
        );
        assert_eq!(scope_of(&RoutePath::new("/try-on/42")), RouteScope::Shopper);
    }

    #[test]
    fn partner_scope_admits_both_partner_roles() {
        let scope = RouteScope::Partner;
        assert!(scope.admits(Role::Affiliate));
        assert!(scope.admits(Role::Merchant));
        assert!(!scope.admits(Role::Admin));
        assert!(!scope.admits(Role::User));
    }
}
