//! Role-keyed navigation tables.
//!
//! Pure lookup, no side effects. Shells re-resolve on every change
//! notification, which is what lets a login swap the visible navigation
//! without a full page reload.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use vetrina_core::{Role, RoutePath};

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: Cow<'static, str>,
    pub path: RoutePath,
}

impl NavItem {
    fn new(label: &'static str, path: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            path: RoutePath::new(path),
        }
    }
}

/// The header's primary action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAction {
    pub label: Cow<'static, str>,
    pub path: RoutePath,
}

/// Everything a header renders for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub nav_items: Vec<NavItem>,
    pub dropdown_items: Vec<NavItem>,
    pub primary_action: PrimaryAction,
}

/// Resolve the navigation set for `role`.
///
/// The primary action always lands on the role's canonical home route.
pub fn resolve_navigation(role: Role) -> Navigation {
    let primary_action = PrimaryAction {
        label: Cow::Borrowed(match role {
            Role::Guest => "Sign In",
            Role::User => "Home",
            Role::Merchant | Role::Affiliate | Role::Admin => "Dashboard",
        }),
        path: role.home_route(),
    };

    let (nav_items, dropdown_items) = match role {
        // Guests get the marketing chrome only; nothing role-specific.
        Role::Guest => (Vec::new(), Vec::new()),
        Role::User => (
            vec![
                NavItem::new("Home", "/home"),
                NavItem::new("Try On", "/try-on"),
                NavItem::new("Categories", "/categories"),
                NavItem::new("About", "/about"),
            ],
            vec![
                NavItem::new("My Profile", "/profile"),
                NavItem::new("Wishlist", "/wishlist"),
                NavItem::new("Contact", "/contact"),
                NavItem::new("Become an Affiliate", "/affiliate/signup"),
            ],
        ),
        Role::Merchant => (
            vec![
                NavItem::new("Dashboard", "/merchants"),
                NavItem::new("Products", "/merchants/products"),
                NavItem::new("Analytics", "/merchants/analytics"),
                NavItem::new("Billing", "/merchants/billing"),
            ],
            vec![
                NavItem::new("Account Settings", "/merchants/settings"),
                NavItem::new("Billing", "/merchants/billing"),
                NavItem::new("Support", "/merchants/support"),
                NavItem::new("Contact", "/contact"),
            ],
        ),
        Role::Affiliate => (
            vec![
                NavItem::new("Dashboard", "/affiliate/dashboard"),
                NavItem::new("My Links", "/affiliate/links"),
                NavItem::new("Payments", "/affiliate/payments"),
                NavItem::new("Marketing", "/affiliate/marketing"),
            ],
            vec![
                NavItem::new("My Profile", "/affiliate/profile"),
                NavItem::new("Settings", "/affiliate/settings"),
                NavItem::new("Support", "/affiliate/support"),
                NavItem::new("Visit Store", "/home"),
            ],
        ),
        Role::Admin => (
            vec![
                NavItem::new("Dashboard", "/admin"),
                NavItem::new("Customers", "/admin/customers"),
                NavItem::new("Merchants", "/admin/merchants"),
                NavItem::new("Affiliates", "/admin/affiliates"),
                NavItem::new("Categories", "/admin/categories"),
            ],
            vec![
                NavItem::new("Products", "/admin/products"),
                NavItem::new("Categories", "/admin/categories"),
                NavItem::new("Homepage", "/admin/homepage"),
                NavItem::new("Popups", "/admin/popups"),
            ],
        ),
    };

    Navigation {
        nav_items,
        dropdown_items,
        primary_action,
    }
}
