use std::cell::Cell;
use std::rc::Rc;

use shared::models::Booking;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::TutorHiveClient;
use crate::bookings::{with_review_applied, BookingService};
use crate::models::app_state::AppState;

/// The learner's bookings, each with a one-shot review action. A reviewed
/// booking keeps its button permanently disabled.
#[function_component(MyBookingsPage)]
pub fn my_bookings_page() -> Html {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let session = use_selector(|state: &AppState| state.session.clone());

    let learner_email = session
        .identity
        .as_ref()
        .map(|identity| identity.email.clone());

    {
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(learner_email.clone(), move |email| {
            let email = email.clone();
            let alive = Rc::new(Cell::new(true));
            let alive_task = alive.clone();
            spawn_local(async move {
                let Some(email) = email else {
                    return;
                };
                let service = BookingService::new(Rc::new(TutorHiveClient::shared()));
                match service.bookings_for(&email).await {
                    Ok(fetched) if alive_task.get() => {
                        bookings.set(fetched);
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

    let on_review = {
        let bookings = bookings.clone();
        let error = error.clone();
        Callback::from(move |booking: Booking| {
            let bookings = bookings.clone();
            let error = error.clone();
            spawn_local(async move {
                let service = BookingService::new(Rc::new(TutorHiveClient::shared()));
                match service.submit_review(&booking).await {
                    Ok(_) => bookings.set(with_review_applied(&bookings, &booking.id)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"My bookings"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            if *loading {
                <div class="flex justify-center py-12">
                    <span class="loading loading-dots loading-lg"></span>
                </div>
            } else if bookings.is_empty() {
                <p class="text-center text-base-content/60 py-12">
                    {"You have no bookings yet. Find a tutor to get started."}
                </p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for bookings.iter().map(|booking| {
                        let on_review = on_review.clone();
                        let booking_for_review = booking.clone();
                        html! {
                            <div class="card card-side bg-base-100 shadow-md" key={booking.id.clone()}>
                                <figure class="w-32 overflow-hidden">
                                    <img class="h-full object-cover" src={booking.image.clone()} alt={booking.language.clone()} />
                                </figure>
                                <div class="card-body">
                                    <h2 class="card-title">{booking.language.clone()}</h2>
                                    <p class="text-sm text-base-content/70">
                                        {format!("Booked {}", booking.booked_at.format("%Y-%m-%d"))}
                                    </p>
                                    <p class="font-semibold">{format!("${:.2}", booking.price)}</p>
                                    <div class="card-actions justify-end">
                                        <button
                                            class="btn btn-outline btn-sm"
                                            disabled={booking.reviewed}
                                            onclick={Callback::from(move |_| {
                                                on_review.emit(booking_for_review.clone());
                                            })}
                                        >
                                            {if booking.reviewed { "Reviewed" } else { "Leave review" }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
