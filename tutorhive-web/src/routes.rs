use std::collections::HashSet;

use crate::containers::dashboard_layout::DashboardLayout;
use crate::containers::layout::Layout;
use crate::guard::{RouteGuard, RouteRequirement};
use crate::models::app_state::AppState;
use crate::pages::*;
use shared::models::UserRole;
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/find-tutors")]
    FindTutors,
    #[at("/find-tutors/:language")]
    FindTutorsByLanguage { language: String },
    #[at("/tutor/:id")]
    TutorDetails { id: String },
    #[at("/add-tutor")]
    AddTutor,
    #[at("/my-tutors")]
    MyTutors,
    #[at("/update-tutor/:id")]
    UpdateTutor { id: String },
    #[at("/bookings")]
    MyBookings,
    #[at("/dashboard")]
    DashboardRoot,
    #[at("/dashboard/*")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// What the route requires of the session; `None` for public pages.
    pub fn requirement(&self) -> Option<RouteRequirement> {
        match self {
            Self::Home
            | Self::Login
            | Self::Register
            | Self::FindTutors
            | Self::FindTutorsByLanguage { .. }
            | Self::NotFound => None,
            Self::TutorDetails { .. }
            | Self::AddTutor
            | Self::MyTutors
            | Self::UpdateTutor { .. }
            | Self::MyBookings
            | Self::DashboardRoot
            | Self::Dashboard => Some(RouteRequirement::AnyAuthenticated),
        }
    }
}

/// The dashboard routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum DashboardRoute {
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/add-tutor")]
    AddTutor,
    #[at("/dashboard/my-tutors")]
    MyTutors,
    #[at("/dashboard/my-bookings")]
    MyBookings,
    #[at("/dashboard/manage-users")]
    ManageUsers,
    #[at("/dashboard/manage-tutors")]
    ManageTutors,
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/dashboard/404")]
    NotFound,
}

impl DashboardRoute {
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Self::Overview | Self::AddTutor | Self::NotFound => RouteRequirement::AnyAuthenticated,
            Self::MyTutors | Self::MyBookings => RouteRequirement::Role(UserRole::User),
            Self::ManageUsers | Self::ManageTutors | Self::Settings => {
                RouteRequirement::Role(UserRole::Admin)
            }
        }
    }
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Dashboard(DashboardRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Home)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

impl From<DashboardRoute> for AppRoute {
    fn from(route: DashboardRoute) -> Self {
        AppRoute::Dashboard(route)
    }
}

/// Where a navigation target is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    /// Header navigation.
    Main,
    /// Dashboard sidebar.
    Dashboard,
    /// Sign-in/register entry points, rendered as header buttons.
    Account,
}

/// Fieldless navigation targets; the currency of [`visible_routes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RouteId {
    Home,
    FindTutors,
    DashboardOverview,
    AddTutor,
    MyTutors,
    MyBookings,
    ManageUsers,
    ManageTutors,
    Settings,
    Login,
    Register,
}

impl RouteId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::FindTutors => "Find Tutors",
            Self::DashboardOverview => "Dashboard",
            Self::AddTutor => "Add Tutor",
            Self::MyTutors => "My Tutors",
            Self::MyBookings => "My Bookings",
            Self::ManageUsers => "Manage Users",
            Self::ManageTutors => "Manage Tutors",
            Self::Settings => "Settings",
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn icon(self) -> IconId {
        match self {
            Self::Home => IconId::HeroiconsOutlineHome,
            Self::FindTutors => IconId::HeroiconsOutlineMagnifyingGlass,
            Self::DashboardOverview => IconId::HeroiconsOutlineSquares2X2,
            Self::AddTutor => IconId::HeroiconsOutlinePlusCircle,
            Self::MyTutors => IconId::HeroiconsOutlineBookOpen,
            Self::MyBookings => IconId::HeroiconsOutlineBookmark,
            Self::ManageUsers => IconId::HeroiconsOutlineUsers,
            Self::ManageTutors => IconId::HeroiconsOutlineAcademicCap,
            Self::Settings => IconId::HeroiconsOutlineCog6Tooth,
            Self::Login => IconId::HeroiconsOutlineArrowRightOnRectangle,
            Self::Register => IconId::HeroiconsOutlineUserPlus,
        }
    }

    pub fn section(self) -> NavSection {
        match self {
            Self::Home | Self::FindTutors => NavSection::Main,
            Self::DashboardOverview
            | Self::AddTutor
            | Self::MyTutors
            | Self::MyBookings
            | Self::ManageUsers
            | Self::ManageTutors
            | Self::Settings => NavSection::Dashboard,
            Self::Login | Self::Register => NavSection::Account,
        }
    }

    pub fn destination(self) -> AppRoute {
        match self {
            Self::Home => MainRoute::Home.into(),
            Self::FindTutors => MainRoute::FindTutors.into(),
            Self::DashboardOverview => DashboardRoute::Overview.into(),
            Self::AddTutor => DashboardRoute::AddTutor.into(),
            Self::MyTutors => DashboardRoute::MyTutors.into(),
            Self::MyBookings => DashboardRoute::MyBookings.into(),
            Self::ManageUsers => DashboardRoute::ManageUsers.into(),
            Self::ManageTutors => DashboardRoute::ManageTutors.into(),
            Self::Settings => DashboardRoute::Settings.into(),
            Self::Login => MainRoute::Login.into(),
            Self::Register => MainRoute::Register.into(),
        }
    }
}

/// The single role-branching point for navigation visibility, consumed by
/// the header and the dashboard sidebar alike. `None` means signed out (or
/// still resolving, which renders the same minimal menu).
pub fn visible_routes(role: Option<UserRole>) -> HashSet<RouteId> {
    let mut routes = HashSet::from([RouteId::Home, RouteId::FindTutors]);
    match role {
        None => {
            routes.insert(RouteId::Login);
            routes.insert(RouteId::Register);
        }
        Some(UserRole::User) => {
            routes.insert(RouteId::DashboardOverview);
            routes.insert(RouteId::AddTutor);
            routes.insert(RouteId::MyTutors);
            routes.insert(RouteId::MyBookings);
        }
        Some(UserRole::Admin) => {
            routes.insert(RouteId::DashboardOverview);
            routes.insert(RouteId::AddTutor);
            routes.insert(RouteId::ManageUsers);
            routes.insert(RouteId::ManageTutors);
            routes.insert(RouteId::Settings);
        }
    }
    routes
}

/// Sidebar entries for the current role, in declaration order.
pub fn sidebar_routes(role: Option<UserRole>) -> Vec<RouteId> {
    let visible = visible_routes(role);
    RouteId::iter()
        .filter(|id| id.section() == NavSection::Dashboard && visible.contains(id))
        .collect()
}

/// Push an arbitrary stored path, e.g. the login return target.
pub fn push_path(navigator: &Navigator, path: &str) {
    match MainRoute::recognize(path) {
        Some(MainRoute::DashboardRoot | MainRoute::Dashboard) => {
            let route = DashboardRoute::recognize(path).unwrap_or(DashboardRoute::Overview);
            navigator.push(&route);
        }
        Some(MainRoute::NotFound) | None => navigator.push(&MainRoute::Home),
        Some(route) => navigator.push(&route),
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());

    let route = props.route.clone();
    if matches!(route, MainRoute::DashboardRoot | MainRoute::Dashboard) {
        return html! { <Switch<DashboardRoute> render={switch_dashboard} /> };
    }

    // Signed-in visitors have no business on the auth pages.
    if matches!(route, MainRoute::Login | MainRoute::Register) && session.is_authenticated() {
        return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
    }

    let page = match route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::FindTutors => html! { <FindTutorsPage /> },
        MainRoute::FindTutorsByLanguage { language } => {
            html! { <FindTutorsPage language={Some(language)} /> }
        }
        MainRoute::TutorDetails { id } => html! { <TutorDetailsPage {id} /> },
        MainRoute::AddTutor => html! { <AddTutorPage /> },
        MainRoute::MyTutors => html! { <MyTutorsPage /> },
        MainRoute::UpdateTutor { id } => html! { <UpdateTutorPage {id} /> },
        MainRoute::MyBookings => html! { <MyBookingsPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
        MainRoute::DashboardRoot | MainRoute::Dashboard => unreachable!("handled above"),
    };

    let inner = match route.requirement() {
        Some(requirement) => html! { <RouteGuard {requirement}>{page}</RouteGuard> },
        None => page,
    };

    html! {
        <Layout current_route={AppRoute::Main(route)}>
            {inner}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch_main(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

/// Switch function for the dashboard routes.
fn switch_dashboard(route: DashboardRoute) -> Html {
    log(std::format!("Switching to dashboard route: {:?}", route).as_str());
    if route == DashboardRoute::NotFound {
        return html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> };
    }

    let requirement = route.requirement();
    let page = match route {
        DashboardRoute::Overview => html! { <DashboardOverviewPage /> },
        DashboardRoute::AddTutor => html! { <AddTutorPage /> },
        DashboardRoute::MyTutors => html! { <MyTutorsPage /> },
        DashboardRoute::MyBookings => html! { <MyBookingsPage /> },
        DashboardRoute::ManageUsers => html! { <ManageUsersPage /> },
        DashboardRoute::ManageTutors => html! { <ManageTutorsPage /> },
        DashboardRoute::Settings => html! { <SettingsPage /> },
        DashboardRoute::NotFound => unreachable!("redirected above"),
    };

    html! {
        <RouteGuard {requirement}>
            <DashboardLayout current_route={route}>
                {page}
            </DashboardLayout>
        </RouteGuard>
    }
}
