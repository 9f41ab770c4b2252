use chrono::Utc;
use gloo_timers::callback::Timeout;
use shared::models::NewTutorRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::auth::identity::Identity;
use crate::models::app_state::AppState;

/// Build the creation payload; the owner fields come from the identity, the
/// review count starts at zero.
fn new_listing(
    identity: &Identity,
    tutor_name: String,
    tutor_email: String,
    image: String,
    language: String,
    price: f64,
    description: String,
) -> NewTutorRequest {
    NewTutorRequest {
        name: identity.display_label().to_string(),
        user_email: identity.email.clone(),
        tutor_name,
        tutor_email,
        image,
        language,
        price,
        description,
        review: 0,
        created_at: Utc::now(),
    }
}

/// Listing submission form. The owner fields come from the session; the
/// tutor fields are free-form.
#[function_component(AddTutorPage)]
pub fn add_tutor_page() -> Html {
    let tutor_name = use_state(String::new);
    let tutor_email = use_state(String::new);
    let image = use_state(String::new);
    let language = use_state(String::new);
    let price = use_state(String::new);
    let description = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);
    let saving = use_state(|| false);
    let session = use_selector(|state: &AppState| state.session.clone());

    let onsubmit = {
        let tutor_name = tutor_name.clone();
        let tutor_email = tutor_email.clone();
        let image = image.clone();
        let language = language.clone();
        let price = price.clone();
        let description = description.clone();
        let error = error.clone();
        let saved = saved.clone();
        let saving = saving.clone();
        let session = session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(identity) = session.identity.clone() else {
                error.set(Some("Sign in required".to_string()));
                return;
            };
            let parsed_price = match price.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    error.set(Some("Price must be a positive number".to_string()));
                    return;
                }
            };
            let request = new_listing(
                &identity,
                (*tutor_name).clone(),
                (*tutor_email).clone(),
                (*image).clone(),
                (*language).clone(),
                parsed_price,
                (*description).clone(),
            );

            saving.set(true);
            error.set(None);
            let error = error.clone();
            let saved = saved.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.create_tutor(&request).await {
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

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let bind_textarea = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">{"Add a tutor"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error mb-4">
                    <span>{message.clone()}</span>
                </div>
            }
            if *saved {
                <div class="alert alert-success mb-4">
                    <span>{"Tutor listing created"}</span>
                </div>
            }
            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="tutor-name">
                            <span class="label-text">{"Tutor name"}</span>
                        </label>
                        <input
                            id="tutor-name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*tutor_name).clone()}
                            oninput={bind_input(tutor_name.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="tutor-email">
                            <span class="label-text">{"Tutor email"}</span>
                        </label>
                        <input
                            id="tutor-email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*tutor_email).clone()}
                            oninput={bind_input(tutor_email.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="language">
                            <span class="label-text">{"Language"}</span>
                        </label>
                        <input
                            id="language"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*language).clone()}
                            oninput={bind_input(language.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="price">
                            <span class="label-text">{"Hourly price (USD)"}</span>
                        </label>
                        <input
                            id="price"
                            class="input input-bordered"
                            type="number"
                            min="1"
                            step="0.01"
                            required=true
                            value={(*price).clone()}
                            oninput={bind_input(price.clone())}
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="image">
                        <span class="label-text">{"Image URL"}</span>
                    </label>
                    <input
                        id="image"
                        class="input input-bordered"
                        type="url"
                        required=true
                        value={(*image).clone()}
                        oninput={bind_input(image.clone())}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{"Description"}</span>
                    </label>
                    <textarea
                        id="description"
                        class="textarea textarea-bordered h-28"
                        required=true
                        value={(*description).clone()}
                        oninput={bind_textarea}
                    />
                </div>
                <button class="btn btn-primary" type="submit" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Create listing" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::new_listing;
    use crate::auth::identity::Identity;

    #[test]
    fn listing_owner_fields_come_from_the_identity() {
        let identity = Identity {
            uid: "u1".to_string(),
            email: "asha@example.com".to_string(),
            display_name: Some("Asha".to_string()),
        };
        let request = new_listing(
            &identity,
            "Maria Lopez".to_string(),
            "maria@tutors.example".to_string(),
            "https://img.example/maria.jpg".to_string(),
            "Spanish".to_string(),
            22.5,
            "Conversational Spanish.".to_string(),
        );
        assert_eq!(request.name, "Asha");
        assert_eq!(request.user_email, "asha@example.com");
        assert_eq!(request.review, 0);
    }

    #[test]
    fn listing_owner_name_falls_back_to_the_email() {
        let identity = Identity {
            uid: "u1".to_string(),
            email: "asha@example.com".to_string(),
            display_name: None,
        };
        let request = new_listing(
            &identity,
            "Ken".to_string(),
            "ken@tutors.example".to_string(),
            String::new(),
            "Japanese".to_string(),
            30.0,
            String::new(),
        );
        assert_eq!(request.name, "asha@example.com");
    }
}
