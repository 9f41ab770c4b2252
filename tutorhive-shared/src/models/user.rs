use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Authorization label attached to a user record.
///
/// The backend stores the role as a lowercase string; parsing is
/// ASCII-case-insensitive so comparisons against values typed or stored with
/// different casing never produce a spurious mismatch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Return the canonical string representation stored by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("user") {
            Ok(Self::User)
        } else if value.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else {
            Err("unknown user role")
        }
    }
}

/// A user record as stored by the backend.
///
/// Records created before roles existed may omit the field; a missing role
/// deserializes to [`UserRole::User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Backend-issued record id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address; also the key used for role lookups.
    pub email: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Create-or-update payload sent on registration and federated sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpsertUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Admin-initiated role change for an existing user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}
