use shared::models::UserRole;

use crate::auth::identity::Identity;

/// The resolved identity/role pair exposed to the rest of the application.
///
/// There is exactly one writer (the resolver) and many readers. While
/// `resolving` is true no authorization decision may be made; consumers
/// render a neutral waiting state instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub role: Option<UserRole>,
    pub resolving: bool,
}

impl Default for Session {
    /// The pending session shown from mount until the first identity
    /// notification settles.
    fn default() -> Self {
        Self {
            identity: None,
            role: None,
            resolving: true,
        }
    }
}

impl Session {
    /// A settled session for the given identity and role.
    pub fn settled(identity: Identity, role: UserRole) -> Self {
        Self {
            identity: Some(identity),
            role: Some(role),
            resolving: false,
        }
    }

    /// A settled signed-out session.
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            role: None,
            resolving: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The role usable for navigation decisions; `None` while signed out or
    /// still resolving.
    pub fn effective_role(&self) -> Option<UserRole> {
        if self.resolving || self.identity.is_none() {
            None
        } else {
            self.role
        }
    }
}
