//! The fixed demo credential table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vetrina_core::Role;

/// A login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

/// Why a login attempt failed.
///
/// Recoverable; surfaced inline next to the form, never escalated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("invalid username or password")]
    Invalid,
}

/// One fixed pair per portal. This is a storefront demo, not an
/// authentication protocol; the table below is the entire credential
/// "database".
const DEMO_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("user", "password", Role::User),
    ("admin", "superadmin", Role::Admin),
    ("merchant", "supermerchant", Role::Merchant),
    ("affiliate", "affiliate123", Role::Affiliate),
];

/// Check a credential pair against the demo table.
pub fn verify_credentials(credentials: &Credentials) -> Result<Role, CredentialError> {
    DEMO_ACCOUNTS
        .iter()
        .find(|(identifier, secret, _)| {
            *identifier == credentials.identifier && *secret == credentials.secret
        })
        .map(|(_, _, role)| *role)
        .ok_or(CredentialError::Invalid)
}
