//! Tests for the routing system
//!
//! Validates path recognition, per-route requirements, and the single
//! role-visibility function feeding the header and sidebar.

#[cfg(test)]
mod tests {
    use shared::models::UserRole;
    use yew_router::Routable;

    use crate::guard::RouteRequirement;
    use crate::routes::{
        DashboardRoute, MainRoute, NavSection, RouteId, sidebar_routes, visible_routes,
    };

    #[test]
    fn main_paths_recognize() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(
            MainRoute::recognize("/find-tutors/spanish"),
            Some(MainRoute::FindTutorsByLanguage {
                language: "spanish".to_string()
            })
        );
        assert_eq!(
            MainRoute::recognize("/tutor/t1"),
            Some(MainRoute::TutorDetails {
                id: "t1".to_string()
            })
        );
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::DashboardRoot));
        assert_eq!(
            MainRoute::recognize("/dashboard/manage-users"),
            Some(MainRoute::Dashboard)
        );
        assert_eq!(MainRoute::recognize("/no-such-page"), Some(MainRoute::NotFound));
    }

    #[test]
    fn dashboard_paths_recognize() {
        assert_eq!(
            DashboardRoute::recognize("/dashboard"),
            Some(DashboardRoute::Overview)
        );
        assert_eq!(
            DashboardRoute::recognize("/dashboard/my-bookings"),
            Some(DashboardRoute::MyBookings)
        );
        assert_eq!(
            DashboardRoute::recognize("/dashboard/bogus"),
            Some(DashboardRoute::NotFound)
        );
    }

    #[test]
    fn public_routes_have_no_requirement() {
        for route in [
            MainRoute::Home,
            MainRoute::Login,
            MainRoute::Register,
            MainRoute::FindTutors,
            MainRoute::NotFound,
        ] {
            assert_eq!(route.requirement(), None, "{route:?}");
        }
    }

    #[test]
    fn protected_main_routes_require_authentication() {
        for route in [
            MainRoute::AddTutor,
            MainRoute::MyTutors,
            MainRoute::MyBookings,
            MainRoute::TutorDetails {
                id: "t1".to_string(),
            },
            MainRoute::UpdateTutor {
                id: "t1".to_string(),
            },
        ] {
            assert_eq!(
                route.requirement(),
                Some(RouteRequirement::AnyAuthenticated),
                "{route:?}"
            );
        }
    }

    #[test]
    fn dashboard_requirements_follow_role_split() {
        assert_eq!(
            DashboardRoute::Overview.requirement(),
            RouteRequirement::AnyAuthenticated
        );
        assert_eq!(
            DashboardRoute::AddTutor.requirement(),
            RouteRequirement::AnyAuthenticated
        );
        for route in [DashboardRoute::MyTutors, DashboardRoute::MyBookings] {
            assert_eq!(route.requirement(), RouteRequirement::Role(UserRole::User));
        }
        for route in [
            DashboardRoute::ManageUsers,
            DashboardRoute::ManageTutors,
            DashboardRoute::Settings,
        ] {
            assert_eq!(route.requirement(), RouteRequirement::Role(UserRole::Admin));
        }
    }

    #[test]
    fn signed_out_visitors_see_only_public_entries() {
        let routes = visible_routes(None);
        assert!(routes.contains(&RouteId::Home));
        assert!(routes.contains(&RouteId::FindTutors));
        assert!(routes.contains(&RouteId::Login));
        assert!(routes.contains(&RouteId::Register));
        assert!(!routes.contains(&RouteId::DashboardOverview));
        assert!(!routes.contains(&RouteId::ManageUsers));
    }

    #[test]
    fn user_menu_has_no_admin_entries() {
        let routes = visible_routes(Some(UserRole::User));
        assert!(routes.contains(&RouteId::MyTutors));
        assert!(routes.contains(&RouteId::MyBookings));
        assert!(routes.contains(&RouteId::AddTutor));
        assert!(!routes.contains(&RouteId::ManageUsers));
        assert!(!routes.contains(&RouteId::ManageTutors));
        assert!(!routes.contains(&RouteId::Settings));
        assert!(!routes.contains(&RouteId::Login));
    }

    #[test]
    fn admin_menu_has_no_learner_entries() {
        let routes = visible_routes(Some(UserRole::Admin));
        assert!(routes.contains(&RouteId::ManageUsers));
        assert!(routes.contains(&RouteId::ManageTutors));
        assert!(routes.contains(&RouteId::Settings));
        assert!(!routes.contains(&RouteId::MyTutors));
        assert!(!routes.contains(&RouteId::MyBookings));
    }

    #[test]
    fn sidebar_lists_only_dashboard_section_entries() {
        for role in [Some(UserRole::User), Some(UserRole::Admin)] {
            for id in sidebar_routes(role) {
                assert_eq!(id.section(), NavSection::Dashboard, "{id:?}");
            }
        }
        assert!(sidebar_routes(None).is_empty());
    }

    #[test]
    fn nav_targets_resolve_to_real_routes() {
        use crate::routes::AppRoute;
        for id in [
            RouteId::Home,
            RouteId::DashboardOverview,
            RouteId::ManageTutors,
        ] {
            match id.destination() {
                AppRoute::Main(route) => assert!(!route.to_path().is_empty()),
                AppRoute::Dashboard(route) => {
                    assert!(route.to_path().starts_with("/dashboard"));
                }
            }
        }
        assert!(!RouteId::Home.label().is_empty());
    }
}
