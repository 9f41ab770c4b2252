use std::cell::Cell;
use std::rc::Rc;

use shared::models::Tutor;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::TutorHiveClient;
use crate::routes::MainRoute;

/// Admin table over every listing on the platform.
#[function_component(ManageTutorsPage)]
pub fn manage_tutors_page() -> Html {
    let tutors = use_state(Vec::<Tutor>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let tutors = tutors.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.tutors().await {
                    Ok(fetched) if alive_task.get() => {
                        tutors.set(fetched);
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
            <h1 class="text-3xl font-bold">{"Manage tutors"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if *loading {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            } else {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Tutor"}</th>
                                <th>{"Owner"}</th>
                                <th>{"Language"}</th>
                                <th>{"Price"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for tutors.iter().map(|tutor| {
                                let id = tutor.id.clone();
                                let on_delete = on_delete.clone();
                                html! {
                                    <tr key={tutor.id.clone()}>
                                        <td>{tutor.tutor_name.clone()}</td>
                                        <td>{tutor.user_email.clone()}</td>
                                        <td>{tutor.language.clone()}</td>
                                        <td>{format!("${:.2}", tutor.price)}</td>
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
