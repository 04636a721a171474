use serde::{Deserialize, Serialize};
use std::fmt;

/// The three workflow roles.
///
/// Roles are resolved server-side at login and carried on the session; the
/// client is never the authority for role membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates and revises documents.
    Submitter,
    /// Performs first-pass approval.
    Reviewer,
    /// Makes the final disposition.
    Approver,
}

impl Role {
    /// Parse a role from a string (case-insensitive).
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "submitter" => Some(Role::Submitter),
            "reviewer" => Some(Role::Reviewer),
            "approver" => Some(Role::Approver),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Submitter => write!(f, "submitter"),
            Role::Reviewer => write!(f, "reviewer"),
            Role::Approver => write!(f, "approver"),
        }
    }
}

/// An authenticated user with a server-resolved role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// Unique user identifier.
    pub user_id: String,
    /// Display username.
    pub username: String,
    /// The user's workflow role.
    pub role: Role,
}
