use std::cell::Cell;
use std::rc::Rc;

use shared::models::Tutor;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// Listings owned by the signed-in account, with edit and delete actions.
#[function_component(MyTutorsPage)]
pub fn my_tutors_page() -> Html {
    let tutors = use_state(Vec::<Tutor>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let session = use_selector(|state: &AppState| state.session.clone());

    let owner_email = session
        .identity
        .as_ref()
        .map(|identity| identity.email.clone());

    {
        let tutors = tutors.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(owner_email.clone(), move |email| {
            let email = email.clone();
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let Some(email) = email else {
                    return;
                };
                let client = TutorHiveClient::shared();
                match client.tutors().await {
                    Ok(all) if alive_task.get() => {
                        tutors.set(
                            all.into_iter()
                                .filter(|tutor| tutor.user_email == email)
                                .collect(),
                        );
                        loading.set(false);
                    }
                    Err(err) if alive_task.get() => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                    _ => {}
                }
            });
            move || alive.set(false)
        });
    }

    let on_delete = {
        let tutors = tutors.clone();
        let error = error.clone();
        Callback::from(move |id: String| {
            let tutors = tutors.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.delete_tutor(&id).await {
                    Ok(()) => {
                        let remaining: Vec<Tutor> = tutors
                            .iter()
                            .filter(|tutor| tutor.id != id)
                            .cloned()
                            .collect();
                        tutors.set(remaining);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"My tutors"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if *loading {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            } else if tutors.is_empty() {
                <p class="text-center text-base-content/60 py-12">
                    {"You have not created any tutor listings yet."}
                </p>
            } else {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Tutor"}</th>
                                <th>{"Language"}</th>
                                <th>{"Price"}</th>
                                <th>{"Reviews"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for tutors.iter().map(|tutor| {
                                let id = tutor.id.clone();
                                let on_delete = on_delete.clone();
                                html! {
                                    <tr key={tutor.id.clone()}>
                                        <td class="flex items-center gap-3">
                                            <div class="avatar">
                                                <div class="w-10 rounded">
                                                    <img src={tutor.image.clone()} alt={tutor.tutor_name.clone()} />
                                                </div>
                                            </div>
                                            {tutor.tutor_name.clone()}
                                        </td>
                                        <td>{tutor.language.clone()}</td>
                                        <td>{format!("${:.2}", tutor.price)}</td>
                                        <td>{tutor.review}</td>
                                        <td class="flex gap-2">
                                            <Link<MainRoute>
                                                to={MainRoute::UpdateTutor { id: tutor.id.clone() }}
                                                classes="btn btn-outline btn-sm"
                                            >
                                                {"Edit"}
                                            </Link<MainRoute>>
                                            <button
                                                class="btn btn-error btn-outline btn-sm"
                                                onclick={Callback::from(move |_| on_delete.emit(id.clone()))}
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
