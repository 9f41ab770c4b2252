use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

use shared::models::{UserRecord, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api::TutorHiveClient;

/// Admin table of registered accounts with role assignment and removal.
#[function_component(ManageUsersPage)]
pub fn manage_users_page() -> Html {
    let users = use_state(Vec::<UserRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.users().await {
                    Ok(fetched) if alive_task.get() => {
                        users.set(fetched);
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

    let on_role_change = {
        let users = users.clone();
        let error = error.clone();
        Callback::from(move |(id, role): (String, UserRole)| {
            let users = users.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.update_user_role(&id, role).await {
                    Ok(()) => {
                        let updated: Vec<UserRecord> = users
                            .iter()
                            .cloned()
                            .map(|mut record| {
                                if record.id == id {
                                    record.role = role;
                                }
                                record
                            })
                            .collect();
                        users.set(updated);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        Callback::from(move |id: String| {
            let users = users.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.delete_user(&id).await {
                    Ok(()) => {
                        let remaining: Vec<UserRecord> = users
                            .iter()
                            .filter(|record| record.id != id)
                            .cloned()
                            .collect();
                        users.set(remaining);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Manage users"}</h1>
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
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Role"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|record| {
                                let change_id = record.id.clone();
                                let delete_id = record.id.clone();
                                let on_role_change = on_role_change.clone();
                                let on_delete = on_delete.clone();
                                html! {
                                    <tr key={record.id.clone()}>
                                        <td>{record.name.clone()}</td>
                                        <td>{record.email.clone()}</td>
                                        <td>
                                            <select
                                                class="select select-bordered select-sm"
                                                onchange={Callback::from(move |event: Event| {
                                                    if let Some(select) =
                                                        event.target_dyn_into::<HtmlSelectElement>()
                                                    {
                                                        if let Ok(role) =
                                                            UserRole::from_str(&select.value())
                                                        {
                                                            on_role_change
                                                                .emit((change_id.clone(), role));
                                                        }
                                                    }
                                                })}
                                            >
                                                <option
                                                    value="user"
                                                    selected={record.role == UserRole::User}
                                                >
                                                    {"User"}
                                                </option>
                                                <option
                                                    value="admin"
                                                    selected={record.role == UserRole::Admin}
                                                >
                                                    {"Admin"}
                                                </option>
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-error btn-outline btn-sm"
                                                onclick={Callback::from(move |_| {
                                                    on_delete.emit(delete_id.clone());
                                                })}
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
