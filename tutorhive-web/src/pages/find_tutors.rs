use std::cell::Cell;
use std::rc::Rc;

use shared::models::Tutor;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::TutorHiveClient;
use crate::routes::MainRoute;

/// Free-text match over the advertised tutor's name and language.
fn matches_query(tutor: &Tutor, query: &str) -> bool {
    query.is_empty()
        || tutor.tutor_name.to_lowercase().contains(query)
        || tutor.language.to_lowercase().contains(query)
}

#[derive(Properties, PartialEq)]
pub struct FindTutorsProps {
    /// When set, only tutors teaching this language are shown.
    #[prop_or_default]
    pub language: Option<String>,
}

/// Tutor catalogue with an optional language filter and a free-text search
/// over name and language.
#[function_component(FindTutorsPage)]
pub fn find_tutors_page(props: &FindTutorsProps) -> Html {
    let tutors = use_state(Vec::<Tutor>::new);
    let search = use_state(String::new);
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

    let oninput = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let query = search.to_lowercase();
    let visible: Vec<&Tutor> = tutors
        .iter()
        .filter(|tutor| match &props.language {
            Some(language) => tutor.language.eq_ignore_ascii_case(language),
            None => true,
        })
        .filter(|tutor| matches_query(tutor, &query))
        .collect();

    let heading = match &props.language {
        Some(language) => format!("{language} tutors"),
        None => "Find tutors".to_string(),
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <h1 class="text-3xl font-bold">{heading}</h1>
                <input
                    class="input input-bordered w-full sm:w-72"
                    type="search"
                    placeholder="Search by name or language"
                    value={(*search).clone()}
                    oninput={oninput}
                />
            </div>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if *loading {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            } else if visible.is_empty() {
                <p class="text-center text-base-content/60 py-12">
                    {"No tutors match your search."}
                </p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for visible.iter().map(|tutor| tutor_card(tutor)) }
                </div>
            }
        </div>
    }
}

fn tutor_card(tutor: &Tutor) -> Html {
    html! {
        <div class="card bg-base-100 shadow-md" key={tutor.id.clone()}>
            <figure class="h-48 overflow-hidden">
                <img class="w-full object-cover" src={tutor.image.clone()} alt={tutor.tutor_name.clone()} />
            </figure>
            <div class="card-body">
                <h2 class="card-title">{tutor.tutor_name.clone()}</h2>
                <p class="text-sm text-base-content/70">{tutor.language.clone()}</p>
                <p class="text-sm line-clamp-2">{tutor.description.clone()}</p>
                <div class="card-actions items-center justify-between mt-2">
                    <span class="font-semibold">{format!("${:.2}", tutor.price)}</span>
                    <Link<MainRoute>
                        to={MainRoute::TutorDetails { id: tutor.id.clone() }}
                        classes="btn btn-primary btn-sm"
                    >
                        {"Details"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use shared::models::Tutor;

    use super::matches_query;

    fn tutor() -> Tutor {
        Tutor {
            id: "t1".to_string(),
            tutor_name: "Maria Lopez".to_string(),
            tutor_email: "maria@tutors.example".to_string(),
            name: "Asha".to_string(),
            user_email: "asha@example.com".to_string(),
            image: String::new(),
            language: "Spanish".to_string(),
            price: 22.5,
            description: String::new(),
            review: 0,
            created_at: "2026-01-15T09:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn search_matches_the_advertised_tutor_and_language() {
        assert!(matches_query(&tutor(), ""));
        assert!(matches_query(&tutor(), "maria"));
        assert!(matches_query(&tutor(), "spanish"));
    }

    #[test]
    fn search_does_not_match_the_listing_owner() {
        assert!(!matches_query(&tutor(), "asha"));
    }
}
