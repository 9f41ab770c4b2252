use gloo_timers::callback::Timeout;
use shared::models::UpsertUserRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::auth::session::Session;
use crate::models::app_state::AppState;

/// Seed for the editable display-name field.
fn initial_display_name(session: &Session) -> String {
    session
        .identity
        .as_ref()
        .map(|identity| identity.display_label().to_string())
        .unwrap_or_default()
}

/// Admin profile settings. Saving re-upserts the user record so the display
/// name stays in sync with the backend.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let name = {
        let session = session.clone();
        use_state(move || initial_display_name(&session))
    };
    let saved = use_state(|| false);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let email = session
        .identity
        .as_ref()
        .map(|identity| identity.email.clone())
        .unwrap_or_default();
    let role = session.effective_role().unwrap_or_default();

    let onsubmit = {
        let name = name.clone();
        let saved = saved.clone();
        let saving = saving.clone();
        let error = error.clone();
        let email = email.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = UpsertUserRequest {
                name: (*name).clone(),
                email: email.clone(),
                role,
            };
            saving.set(true);
            error.set(None);
            let saved = saved.clone();
            let saving = saving.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.upsert_user(&request).await {
                    Ok(()) => {
                        saved.set(true);
                        let saved_reset = saved.clone();
                        Timeout::new(3_000, move || saved_reset.set(false)).forget();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let oninput = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    html! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">{"Settings"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if *saved {
                <div class="alert alert-success">
                    <span>{"Profile saved"}</span>
                </div>
            }
            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="display-name">
                        <span class="label-text">{"Display name"}</span>
                    </label>
                    <input
                        id="display-name"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*name).clone()}
                        oninput={oninput}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input id="email" class="input input-bordered" type="email" disabled=true value={email} />
                </div>
                <div class="form-control">
                    <label class="label" for="role">
                        <span class="label-text">{"Role"}</span>
                    </label>
                    <input
                        id="role"
                        class="input input-bordered"
                        type="text"
                        disabled=true
                        value={role.as_str()}
                    />
                </div>
                <button class="btn btn-primary" type="submit" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use shared::models::UserRole;

    use super::initial_display_name;
    use crate::auth::identity::Identity;
    use crate::auth::session::Session;

    #[test]
    fn display_name_seed_is_an_owned_string() {
        let session = Session::settled(
            Identity {
                uid: "u1".to_string(),
                email: "asha@example.com".to_string(),
                display_name: Some("Asha".to_string()),
            },
            UserRole::Admin,
        );
        let seed: String = initial_display_name(&session);
        assert_eq!(seed, "Asha");
    }

    #[test]
    fn display_name_seed_is_empty_when_signed_out() {
        assert_eq!(initial_display_name(&Session::signed_out()), "");
    }
}
