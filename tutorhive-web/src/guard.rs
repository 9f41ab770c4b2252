use gloo_storage::{SessionStorage, Storage};
use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::auth::session::Session;
use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// SessionStorage key holding the path a redirected visitor was trying to
/// reach, so login can return them there.
const RETURN_TO_KEY: &str = "tutorhive.return-to";

/// What a protected view requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    AnyAuthenticated,
    Role(UserRole),
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Identity resolution has not settled; render a neutral waiting state.
    Waiting,
    Allow,
    RedirectToLogin,
    /// Role mismatch; deliberately indistinguishable from unauthenticated —
    /// there is no dedicated forbidden page.
    RedirectHome,
}

/// Pure access decision for a navigation target.
///
/// Never decides while the session is resolving; that would flash a false
/// deny before the role arrives.
pub fn evaluate(session: &Session, requirement: RouteRequirement) -> GuardVerdict {
    if session.resolving {
        return GuardVerdict::Waiting;
    }
    if !session.is_authenticated() {
        return GuardVerdict::RedirectToLogin;
    }
    match requirement {
        RouteRequirement::AnyAuthenticated => GuardVerdict::Allow,
        RouteRequirement::Role(required) if session.role == Some(required) => GuardVerdict::Allow,
        RouteRequirement::Role(_) => GuardVerdict::RedirectHome,
    }
}

/// Stash the attempted path for the login page to return to.
pub fn remember_return_path(path: &str) {
    let _ = SessionStorage::set(RETURN_TO_KEY, path.to_string());
}

/// Take (and clear) the stashed return path, if any.
pub fn take_return_path() -> Option<String> {
    let path: Option<String> = SessionStorage::get(RETURN_TO_KEY).ok();
    SessionStorage::delete(RETURN_TO_KEY);
    path
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub requirement: RouteRequirement,
    pub children: Children,
}

/// Wrapper component gating a protected view per the guard verdict.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let location = use_location();

    match evaluate(&session, props.requirement) {
        GuardVerdict::Waiting => html! { <Loading /> },
        GuardVerdict::Allow => html! { <>{ props.children.clone() }</> },
        GuardVerdict::RedirectToLogin => {
            if let Some(location) = location {
                remember_return_path(location.path());
            }
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
        GuardVerdict::RedirectHome => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
    }
}
