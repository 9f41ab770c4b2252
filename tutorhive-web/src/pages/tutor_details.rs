use std::cell::Cell;
use std::rc::Rc;

use shared::models::Tutor;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::bookings::BookingService;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct TutorDetailsProps {
    pub id: String,
}

/// Detail view for a single tutor with the booking entry point.
#[function_component(TutorDetailsPage)]
pub fn tutor_details_page(props: &TutorDetailsProps) -> Html {
    let tutor = use_state(|| None::<Tutor>);
    let error = use_state(|| None::<String>);
    let booked = use_state(|| false);
    let booking = use_state(|| false);
    let session = use_selector(|state: &AppState| state.session.clone());
    let navigator = use_navigator();

    {
        let tutor = tutor.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let client = TutorHiveClient::shared();
                match client.tutor(&id).await {
                    Ok(fetched) if alive_task.get() => tutor.set(Some(fetched)),
                    Err(err) if alive_task.get() => error.set(Some(err.to_string())),
                    _ => {}
                }
            });
            move || alive.set(false)
        });
    }

    let on_book = {
        let tutor = tutor.clone();
        let session = session.clone();
        let error = error.clone();
        let booked = booked.clone();
        let booking = booking.clone();
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            let Some(tutor) = (*tutor).clone() else {
                return;
            };
            let session = (*session).clone();
            let error = error.clone();
            let booked = booked.clone();
            let booking = booking.clone();
            let navigator = navigator.clone();
            booking.set(true);
            spawn_local(async move {
                let service = BookingService::new(Rc::new(TutorHiveClient::shared()));
                match service.book(&tutor, &session).await {
                    Ok(_) => {
                        booked.set(true);
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::MyBookings);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                booking.set(false);
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if let Some(tutor) = &*tutor {
                <div class="card lg:card-side bg-base-100 shadow-lg">
                    <figure class="lg:w-1/2 max-h-96 overflow-hidden">
                        <img class="w-full object-cover" src={tutor.image.clone()} alt={tutor.tutor_name.clone()} />
                    </figure>
                    <div class="card-body lg:w-1/2">
                        <h1 class="card-title text-3xl">{tutor.tutor_name.clone()}</h1>
                        <p class="badge badge-outline">{tutor.language.clone()}</p>
                        <p>{tutor.description.clone()}</p>
                        <div class="flex items-center gap-4 text-sm text-base-content/70">
                            <span>{format!("Listed by {}", tutor.name)}</span>
                            <span>{format!("Reviews: {}", tutor.review)}</span>
                        </div>
                        <div class="card-actions items-center justify-between mt-4">
                            <span class="text-2xl font-semibold">{format!("${:.2}", tutor.price)}</span>
                            <button
                                class="btn btn-primary"
                                onclick={on_book}
                                disabled={*booking || *booked}
                            >
                                {if *booked { "Booked" } else { "Book now" }}
                            </button>
                        </div>
                    </div>
                </div>
            } else if error.is_none() {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            }
        </div>
    }
}
