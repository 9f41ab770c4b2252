use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::{UpsertUserRequest, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::api::TutorHiveClient;
use crate::auth::gateway;
use crate::routes::MainRoute;

static HAS_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").unwrap());
static HAS_LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").unwrap());

/// Password rule shared with the original product: uppercase, lowercase,
/// at least six characters.
fn password_issue(password: &str) -> Option<&'static str> {
    if password.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else if !HAS_UPPERCASE.is_match(password) {
        Some("Password must contain an uppercase letter")
    } else if !HAS_LOWERCASE.is_match(password) {
        Some("Password must contain a lowercase letter")
    } else {
        None
    }
}

/// Registration page: provider account creation followed by the user-record
/// upsert that the role lookup depends on.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = (*name_handle).clone();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();

            if let Some(issue) = password_issue(&password_value) {
                error_handle.set(Some(issue.to_string()));
                return;
            }

            loading_handle.set(true);
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match gateway::register_with_password(&name_value, &email_value, &password_value)
                    .await
                {
                    Ok(_) => {
                        let client = TutorHiveClient::shared();
                        let request = UpsertUserRequest {
                            name: name_value,
                            email: email_value,
                            role: UserRole::User,
                        };
                        match client.upsert_user(&request).await {
                            Ok(()) => {
                                if let Some(navigator) = &navigator {
                                    navigator.push(&MainRoute::Home);
                                }
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

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit =
        (*name).is_empty() || (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-[70vh] bg-base-200 rounded-box">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*name).clone()}
                            oninput={bind_input(name.clone())}
                        />
                    </div>
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
                            oninput={bind_input(email.clone())}
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
                            oninput={bind_input(password.clone())}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Login"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::password_issue;

    #[test]
    fn strong_password_passes() {
        assert_eq!(password_issue("Abcdef"), None);
        assert_eq!(password_issue("Sup3rSecret"), None);
    }

    #[test]
    fn short_password_rejected() {
        assert!(password_issue("Abc12").is_some());
    }

    #[test]
    fn missing_case_classes_rejected() {
        assert!(password_issue("abcdefg").is_some());
        assert!(password_issue("ABCDEFG").is_some());
    }
}
