use std::cell::Cell;
use std::rc::Rc;

use shared::models::UpdateTutorRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::TutorHiveClient;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct UpdateTutorProps {
    pub id: String,
}

/// Edit form for an existing listing, prefilled from the backend record.
#[function_component(UpdateTutorPage)]
pub fn update_tutor_page(props: &UpdateTutorProps) -> Html {
    let tutor_name = use_state(String::new);
    let tutor_email = use_state(String::new);
    let image = use_state(String::new);
    let language = use_state(String::new);
    let price = use_state(String::new);
    let description = use_state(String::new);
    let loaded = use_state(|| false);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    {
        let tutor_name = tutor_name.clone();
        let tutor_email = tutor_email.clone();
        let image = image.clone();
        let language = language.clone();
        let price = price.clone();
        let description = description.clone();
        let loaded = loaded.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.tutor(&id).await {
                    Ok(tutor) if alive_task.get() => {
                        tutor_name.set(tutor.tutor_name);
                        tutor_email.set(tutor.tutor_email);
                        image.set(tutor.image);
                        language.set(tutor.language);
                        price.set(format!("{}", tutor.price));
                        description.set(tutor.description);
                        loaded.set(true);
                    }
                    Err(err) if alive_task.get() => error.set(Some(err.to_string())),
                    _ => {}
                }
            });
            move || alive.set(false)
        });
    }

    let onsubmit = {
        let id = props.id.clone();
        let tutor_name = tutor_name.clone();
        let tutor_email = tutor_email.clone();
        let image = image.clone();
        let language = language.clone();
        let price = price.clone();
        let description = description.clone();
        let saving = saving.clone();
        let error = error.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let parsed_price = match price.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    error.set(Some("Price must be a positive number".to_string()));
                    return;
                }
            };
            let request = UpdateTutorRequest {
                tutor_name: (*tutor_name).clone(),
                tutor_email: (*tutor_email).clone(),
                image: (*image).clone(),
                language: (*language).clone(),
                price: parsed_price,
                description: (*description).clone(),
            };

            saving.set(true);
            error.set(None);
            let id = id.clone();
            let saving = saving.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.update_tutor(&id, &request).await {
                    Ok(()) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::MyTutors);
                        }
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
            <h1 class="text-3xl font-bold mb-6">{"Update tutor"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error mb-4">
                    <span>{message.clone()}</span>
                </div>
            }
            if !*loaded && error.is_none() {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            } else if *loaded {
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
                        {if *saving { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            }
        </div>
    }
}
