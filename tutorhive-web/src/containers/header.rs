use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::{
    header_nav_item::HeaderNavItem, theme_switcher::ThemeSwitcher, user_menu::UserMenu,
};
use crate::models::app_state::AppState;
use crate::routes::{AppRoute, MainRoute, NavSection, RouteId, visible_routes};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
}

/// Top navigation bar. Entries come from [`visible_routes`], so the header
/// never duplicates the role checks that live in `routes.rs`.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let visible = visible_routes(session.effective_role());
    let is_authenticated = session.is_authenticated() && !session.resolving;

    let nav_items = RouteId::iter()
        .filter(|id| {
            visible.contains(id)
                && (id.section() == NavSection::Main || *id == RouteId::DashboardOverview)
        })
        .map(|route_id| {
            html! {
                <HeaderNavItem {route_id} current_route={props.current_route.clone()} />
            }
        })
        .collect::<Html>();

    let account_area = if is_authenticated {
        html! { <UserMenu /> }
    } else {
        html! {
            <>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                    {"Login"}
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-sm">
                    {"Register"}
                </Link<MainRoute>>
            </>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"TutorHive"}
                </Link<MainRoute>>
            </a>
            <ul class="hidden menu sm:menu-horizontal">
                {nav_items}
            </ul>
            <div class="flex items-center gap-2">
                <ThemeSwitcher />
                {account_area}
            </div>
        </nav>
    }
}
