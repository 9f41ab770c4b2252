//! Tests for the route guard decision function
//!
//! The full decision table: waiting while resolving, redirect without an
//! identity, and allow/redirect per required role.

#[cfg(test)]
mod tests {
    use shared::models::UserRole;

    use crate::auth::identity::Identity;
    use crate::auth::session::Session;
    use crate::guard::{GuardVerdict, RouteRequirement, evaluate};

    fn signed_in(role: UserRole) -> Session {
        Session::settled(
            Identity {
                uid: "u1".to_string(),
                email: "asha@example.com".to_string(),
                display_name: None,
            },
            role,
        )
    }

    #[test]
    fn no_decision_while_resolving() {
        let session = Session::default();
        for requirement in [
            RouteRequirement::AnyAuthenticated,
            RouteRequirement::Role(UserRole::User),
            RouteRequirement::Role(UserRole::Admin),
        ] {
            assert_eq!(evaluate(&session, requirement), GuardVerdict::Waiting);
        }
    }

    #[test]
    fn resolving_wins_even_with_an_identity_present() {
        let mut session = signed_in(UserRole::Admin);
        session.resolving = true;
        assert_eq!(
            evaluate(&session, RouteRequirement::Role(UserRole::Admin)),
            GuardVerdict::Waiting
        );
    }

    #[test]
    fn missing_identity_always_redirects_to_login() {
        let session = Session::signed_out();
        for requirement in [
            RouteRequirement::AnyAuthenticated,
            RouteRequirement::Role(UserRole::User),
            RouteRequirement::Role(UserRole::Admin),
        ] {
            assert_eq!(evaluate(&session, requirement), GuardVerdict::RedirectToLogin);
        }
    }

    #[test]
    fn any_authenticated_allows_both_roles() {
        for role in [UserRole::User, UserRole::Admin] {
            assert_eq!(
                evaluate(&signed_in(role), RouteRequirement::AnyAuthenticated),
                GuardVerdict::Allow
            );
        }
    }

    #[test]
    fn matching_role_allows() {
        assert_eq!(
            evaluate(&signed_in(UserRole::Admin), RouteRequirement::Role(UserRole::Admin)),
            GuardVerdict::Allow
        );
        assert_eq!(
            evaluate(&signed_in(UserRole::User), RouteRequirement::Role(UserRole::User)),
            GuardVerdict::Allow
        );
    }

    #[test]
    fn role_mismatch_redirects_home_in_both_directions() {
        assert_eq!(
            evaluate(&signed_in(UserRole::User), RouteRequirement::Role(UserRole::Admin)),
            GuardVerdict::RedirectHome
        );
        assert_eq!(
            evaluate(&signed_in(UserRole::Admin), RouteRequirement::Role(UserRole::User)),
            GuardVerdict::RedirectHome
        );
    }
}
