//! Storage keys for the origin-scoped session state.

/// Authentication flag; the literal `"true"` when signed in, absent
/// otherwise.
pub const IS_AUTHENTICATED: &str = "isAuthenticated";

/// Stored role string; absent reads as `guest`.
pub const USER_ROLE: &str = "userRole";

/// Partner approval status; absent reads as `pending`.
pub const VERIFICATION_STATUS: &str = "verificationStatus";
