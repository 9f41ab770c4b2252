use std::cell::Cell;
use std::rc::Rc;

use shared::models::{LanguageCategory, PlatformStats};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::TutorHiveClient;
use crate::routes::MainRoute;

/// Landing page: hero, stats strip, language category tiles.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let categories = use_state(Vec::<LanguageCategory>::new);
    let stats = use_state(|| None::<PlatformStats>);
    let navigator = use_navigator();

    {
        let categories = categories.clone();
        let stats = stats.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_task = Rc::clone(&alive);
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                let fetched_categories = client.categories().await;
                let fetched_stats = client.dashboard_stats().await;
                if !alive_task.get() {
                    return;
                }
                // Both sections are decorative; failures just leave them empty.
                if let Ok(list) = fetched_categories {
                    categories.set(list);
                }
                if let Ok(counts) = fetched_stats {
                    stats.set(Some(counts));
                }
            });
            move || alive.set(false)
        });
    }

    let stats_strip = stats.as_ref().map_or_else(
        || html! {},
        |stats| {
            html! {
                <div class="stats shadow w-full my-10">
                    <div class="stat">
                        <div class="stat-title">{"Total Tutors"}</div>
                        <div class="stat-value text-primary">{stats.total_tutors}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Total Bookings"}</div>
                        <div class="stat-value text-secondary">{stats.total_bookings}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Languages Taught"}</div>
                        <div class="stat-value">{stats.languages_taught.unwrap_or(0)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Registered Users"}</div>
                        <div class="stat-value">{stats.registered_users.unwrap_or(0)}</div>
                    </div>
                </div>
            }
        },
    );

    let tiles = categories
        .iter()
        .map(|category| {
            let path = category.path.clone();
            let navigator = navigator.clone();
            let onclick = Callback::from(move |_| {
                if let Some(navigator) = &navigator {
                    navigator.push(&MainRoute::FindTutorsByLanguage {
                        language: path.clone(),
                    });
                }
            });
            html! {
                <button class="card bg-base-200 shadow-md hover:shadow-xl transition-shadow text-left" {onclick}>
                    <div class="card-body">
                        <h3 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineLanguage} class="h-6 w-6" />
                            {&category.title}
                        </h3>
                        <p class="text-sm text-base-content/70">
                            {format!("Discover {} tutors", category.title)}
                        </p>
                    </div>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="max-w-7xl mx-auto space-y-10">
            <div class="hero bg-base-200 rounded-box py-16">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{"Find your language tutor"}</h1>
                        <p class="py-4 text-base-content/70">
                            {"Browse tutors across a dozen languages, book a session, and leave a review when you're done."}
                        </p>
                        <Link<MainRoute> to={MainRoute::FindTutors} classes="btn btn-primary">
                            {"Find Tutors"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
            {stats_strip}
            <section>
                <h2 class="text-2xl font-bold mb-4">{"Explore language categories"}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {tiles}
                </div>
            </section>
        </div>
    }
}
