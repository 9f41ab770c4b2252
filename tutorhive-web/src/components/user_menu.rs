use tracing::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::auth::gateway;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// Dropdown with the signed-in identity and the sign-out action.
///
/// A failed provider sign-out is logged but does not block navigation; the
/// bridge still pushes the local signed-out notification.
#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_selector(|state: &AppState| state.session.clone());
    let Some(identity) = session.identity.clone() else {
        return html! {};
    };

    let sign_out = {
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let navigator = navigator.clone();
            spawn_local(async move {
                if let Err(err) = gateway::sign_out().await {
                    error!(message = %gateway::bridge_error_message(&err), "sign-out failed");
                }
                navigator.push(&MainRoute::Login);
            });
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="h-6 w-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ identity.display_label() }</div>
                    <div class="text-xs text-base-content/70">{ &identity.email }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a onclick={sign_out}>{"Sign out"}</a></li>
            </ul>
        </div>
    }
}
