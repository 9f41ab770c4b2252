use shared::models::UpsertUserRequest;
use shared::models::UserRole;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::api::TutorHiveClient;
use crate::auth::gateway;
use crate::guard::take_return_path;
use crate::routes::{MainRoute, push_path};

/// Sign-in page: email/password plus Google, returning the visitor to the
/// path they were bounced from.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let finish = {
        let navigator = navigator.clone();
        move || {
            if let Some(navigator) = &navigator {
                match take_return_path() {
                    Some(path) => push_path(navigator, &path),
                    None => navigator.push(&MainRoute::Home),
                }
            }
        }
    };

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let finish = finish.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let finish = finish.clone();
            spawn_local(async move {
                match gateway::sign_in_with_password(&email_value, &password_value).await {
                    Ok(_) => {
                        // The record must exist server-side; its absence means
                        // registration never completed.
                        let client = TutorHiveClient::shared();
                        match client.user_by_email(&email_value).await {
                            Ok(Some(_)) => finish(),
                            Ok(None) => {
                                error_ref.set(Some("Account record not found; please register first".to_string()));
                            }
                            Err(err) => error_ref.set(Some(err.to_string())),
                        }
                    }
                    Err(err) => error_ref.set(Some(gateway::bridge_error_message(&err))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_google = {
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let finish = finish;
        Callback::from(move |_: MouseEvent| {
            loading_handle.set(true);
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let finish = finish.clone();
            spawn_local(async move {
                match gateway::sign_in_with_google().await {
                    Ok(payload) => {
                        // Federated sign-in may be the first contact; upsert
                        // the user record so the role lookup finds one.
                        if let Some(identity) = gateway::identity_from_js(&payload) {
                            let client = TutorHiveClient::shared();
                            let request = UpsertUserRequest {
                                name: identity.display_label().to_string(),
                                email: identity.email.clone(),
                                role: UserRole::User,
                            };
                            if let Err(err) = client.upsert_user(&request).await {
                                error_ref.set(Some(err.to_string()));
                                loading_ref.set(false);
                                return;
                            }
                        }
                        finish();
                    }
                    Err(err) => error_ref.set(Some(gateway::bridge_error_message(&err))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-[70vh] bg-base-200 rounded-box">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Login to your account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6 gap-2">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Login" }}
                        </button>
                        <button class="btn btn-outline" type="button" onclick={on_google} disabled={is_busy}>
                            {"Continue with Google"}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"New to TutorHive? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"Register"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
