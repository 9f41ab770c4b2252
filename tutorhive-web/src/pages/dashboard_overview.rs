use std::cell::Cell;
use std::rc::Rc;

use shared::models::PlatformStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::models::app_state::AppState;

/// Dashboard landing page: platform-wide counters.
#[function_component(DashboardOverviewPage)]
pub fn dashboard_overview_page() -> Html {
    let stats = use_state(|| None::<PlatformStats>);
    let error = use_state(|| None::<String>);
    let session = use_selector(|state: &AppState| state.session.clone());

    {
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.dashboard_stats().await {
                    Ok(fetched) if alive_task.get() => stats.set(Some(fetched)),
                    Err(err) if alive_task.get() => error.set(Some(err.to_string())),
                    _ => {}
                }
            });
            move || alive.set(false)
        });
    }

    let greeting = session
        .identity
        .as_ref()
        .map(|identity| format!("Welcome back, {}", identity.display_label()))
        .unwrap_or_else(|| "Welcome back".to_string());

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{greeting}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if let Some(stats) = &*stats {
                <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                    <div class="stat">
                        <div class="stat-title">{"Tutors"}</div>
                        <div class="stat-value">{stats.total_tutors}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Bookings"}</div>
                        <div class="stat-value">{stats.total_bookings}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Pending reviews"}</div>
                        <div class="stat-value">{stats.pending_reviews}</div>
                    </div>
                    if let Some(users) = stats.registered_users {
                        <div class="stat">
                            <div class="stat-title">{"Registered users"}</div>
                            <div class="stat-value">{users}</div>
                        </div>
                    }
                    if let Some(languages) = stats.languages_taught {
                        <div class="stat">
                            <div class="stat-title">{"Languages taught"}</div>
                            <div class="stat-value">{languages}</div>
                        </div>
                    }
                </div>
            } else if error.is_none() {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            }
        </div>
    }
}
