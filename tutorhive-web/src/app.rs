use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::TutorHiveClient;
use crate::auth::gateway;
use crate::auth::resolver::SessionResolver;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_main};

/// Root component: wires the identity stream into the session store and
/// mounts the router.
///
/// The resolver lives for the lifetime of the mount. Unmounting drops the
/// identity subscription and shuts the resolver down so a late role fetch
/// can never write into a dead store.
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let resolver = SessionResolver::new(Rc::new(TutorHiveClient::shared()));

            resolver.subscribe(yew::Callback::from(move |session| {
                dispatch.reduce_mut(|state: &mut AppState| state.session = session);
            }));

            let resolver_for_events = resolver.clone();
            let subscription =
                gateway::subscribe_identity(yew::Callback::from(move |identity| {
                    spawn_local(resolver_for_events.on_identity_change(identity));
                }));

            move || {
                drop(subscription);
                resolver.shutdown();
            }
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch_main} />
        </BrowserRouter>
    }
}
