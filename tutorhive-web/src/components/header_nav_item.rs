use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::{AppRoute, RouteId};

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route_id: RouteId,
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
}

/// One navigation entry; links into the main or dashboard tree depending on
/// the target's destination.
#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let destination = props.route_id.destination();
    let active_class = if props.current_route.as_ref() == Some(&destination) {
        "btn-soft"
    } else {
        ""
    };
    let link_classes = classes!("btn", "btn-ghost", "gap-2", active_class);
    let label = props.route_id.label();

    let link = match destination {
        AppRoute::Main(route) => html! {
            <Link<crate::routes::MainRoute> to={route} classes={link_classes}>
                {label}
            </Link<crate::routes::MainRoute>>
        },
        AppRoute::Dashboard(route) => html! {
            <Link<crate::routes::DashboardRoute> to={route} classes={link_classes}>
                {label}
            </Link<crate::routes::DashboardRoute>>
        },
    };

    html! { <li>{link}</li> }
}
