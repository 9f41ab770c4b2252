use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::containers::header::Header;
use crate::models::app_state::AppState;
use crate::routes::{AppRoute, DashboardRoute, MainRoute, RouteId, sidebar_routes};

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
    pub current_route: DashboardRoute,
}

/// Dashboard chrome: header plus a role-derived sidebar. The sidebar reads
/// [`sidebar_routes`], the same visibility source the header uses.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let current = AppRoute::Dashboard(props.current_route.clone());

    let entries = sidebar_routes(session.effective_role())
        .into_iter()
        .map(|route_id: RouteId| {
            let active = route_id.destination() == current;
            let classes = if active {
                "active font-semibold"
            } else {
                ""
            };
            let inner = html! {
                <>
                    <Icon icon_id={route_id.icon()} class="h-5 w-5" />
                    <span class="truncate">{route_id.label()}</span>
                </>
            };
            let link = match route_id.destination() {
                AppRoute::Dashboard(route) => html! {
                    <Link<DashboardRoute> to={route} classes={classes}>{inner}</Link<DashboardRoute>>
                },
                AppRoute::Main(route) => html! {
                    <Link<MainRoute> to={route} classes={classes}>{inner}</Link<MainRoute>>
                },
            };
            html! { <li>{link}</li> }
        })
        .collect::<Html>();

    html! {
        <>
            <Header current_route={Some(current)} />
            <div class="min-h-screen bg-base-100 drawer lg:drawer-open">
                <input id="dashboard-drawer" type="checkbox" class="drawer-toggle" />
                <div class="drawer-content flex flex-col">
                    <main class="flex-grow p-4">
                        {props.children.clone()}
                    </main>
                </div>
                <div class="drawer-side">
                    <label for="dashboard-drawer" class="drawer-overlay"></label>
                    <ul class="menu p-4 w-64 min-h-full bg-base-200 text-base-content gap-1">
                        {entries}
                    </ul>
                </div>
            </div>
        </>
    }
}
