use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use shared::models::{ApiError, Booking, NewBookingRequest, Tutor};

use crate::auth::session::Session;

/// Booking REST surface; implemented by the REST client and by recording
/// mocks in tests.
#[async_trait(?Send)]
pub trait BookingApi {
    async fn create_booking(&self, request: &NewBookingRequest) -> Result<(), ApiError>;
    async fn mark_reviewed(&self, booking_id: &str) -> Result<(), ApiError>;
    async fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, ApiError>;
}

/// Result of a review submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The reviewed flag was recorded remotely.
    Recorded,
    /// The booking was already reviewed; nothing was sent.
    AlreadyReviewed,
}

/// Drives a booking through `NotBooked → Booked(reviewed=false) →
/// Booked(reviewed=true)`. Neither operation retries automatically; both
/// are user-retriable.
pub struct BookingService<A: BookingApi> {
    api: Rc<A>,
}

impl<A: BookingApi> Clone for BookingService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
        }
    }
}

impl<A: BookingApi> BookingService<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }

    /// Book a tutor for the signed-in learner.
    ///
    /// Fails with [`ApiError::Unauthenticated`] before issuing any request
    /// when the session has no identity. On failure no local state is kept.
    pub async fn book(&self, tutor: &Tutor, session: &Session) -> Result<(), ApiError> {
        let Some(identity) = session.identity.as_ref() else {
            return Err(ApiError::Unauthenticated);
        };
        let request = NewBookingRequest {
            tutor_id: tutor.id.clone(),
            tutor_email: tutor.tutor_email.clone(),
            image: tutor.image.clone(),
            language: tutor.language.clone(),
            price: tutor.price,
            email: identity.email.clone(),
            booked_at: Utc::now(),
        };
        self.api.create_booking(&request).await
    }

    /// Submit a review for a booking.
    ///
    /// An already-reviewed booking is an idempotent no-op: the reviewed
    /// flag is one-way and a second transition must never be issued.
    pub async fn submit_review(&self, booking: &Booking) -> Result<ReviewOutcome, ApiError> {
        if booking.reviewed {
            return Ok(ReviewOutcome::AlreadyReviewed);
        }
        self.api.mark_reviewed(&booking.id).await?;
        Ok(ReviewOutcome::Recorded)
    }

    /// List the learner's bookings.
    pub async fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        self.api.bookings_for(email).await
    }
}

/// View-local snapshot update after a confirmed review.
pub fn with_review_applied(bookings: &[Booking], booking_id: &str) -> Vec<Booking> {
    bookings
        .iter()
        .cloned()
        .map(|mut booking| {
            if booking.id == booking_id {
                booking.reviewed = true;
            }
            booking
        })
        .collect()
}
