use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, Booking, ErrorResponse, LanguageCategory, NewBookingRequest, NewTutorRequest,
    PlatformStats, Tutor, UpdateRoleRequest, UpdateTutorRequest, UpsertUserRequest, UserRecord,
    UserRole,
};
use tracing::debug;

use crate::auth::resolver::RoleSource;
use crate::bookings::BookingApi;
use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<TutorHiveClient> = OnceCell::new();
}

/// Lightweight REST client for the TutorHive backend.
#[derive(Clone, Debug)]
pub struct TutorHiveClient {
    base_url: String,
    client: Client,
}

impl TutorHiveClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// List language categories for the landing page.
    pub async fn categories(&self) -> Result<Vec<LanguageCategory>, ApiError> {
        self.get_json("categories", "categories").await
    }

    /// List all tutor listings.
    pub async fn tutors(&self) -> Result<Vec<Tutor>, ApiError> {
        self.get_json("tutors", "tutors").await
    }

    /// Fetch a single tutor listing.
    pub async fn tutor(&self, id: &str) -> Result<Tutor, ApiError> {
        self.get_json(&format!("tutors/{id}"), "tutor").await
    }

    /// Create a tutor listing.
    pub async fn create_tutor(&self, request: &NewTutorRequest) -> Result<(), ApiError> {
        let url = self.api_url("tutors");
        let response = self.client.post(url).json(request).send().await.map_err(transport)?;
        ensure_success(response, "tutor").await.map(drop)
    }

    /// Update the editable fields of a tutor listing.
    pub async fn update_tutor(&self, id: &str, request: &UpdateTutorRequest) -> Result<(), ApiError> {
        let url = self.api_url(&format!("tutors/{id}"));
        let response = self.client.patch(url).json(request).send().await.map_err(transport)?;
        ensure_success(response, "tutor").await.map(drop)
    }

    /// Delete a tutor listing.
    pub async fn delete_tutor(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("tutors/{id}"));
        let response = self.client.delete(url).send().await.map_err(transport)?;
        ensure_success(response, "tutor").await.map(drop)
    }

    /// List all user records.
    pub async fn users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json("users", "users").await
    }

    /// Fetch the user record keyed by email; `Ok(None)` when no record exists.
    pub async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, ApiError> {
        let url = self.api_url(&format!("users/{email}"));
        let response = self.client.get(url).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response, "user").await?;
        // The backend answers an unknown email with a JSON null body.
        response
            .json::<Option<UserRecord>>()
            .await
            .map_err(transport)
    }

    /// Create or update a user record (registration, federated sign-in).
    pub async fn upsert_user(&self, request: &UpsertUserRequest) -> Result<(), ApiError> {
        let url = self.api_url("users");
        let response = self.client.post(url).json(request).send().await.map_err(transport)?;
        ensure_success(response, "user").await.map(drop)
    }

    /// Change the role on a user record.
    pub async fn update_user_role(&self, id: &str, role: UserRole) -> Result<(), ApiError> {
        let url = self.api_url(&format!("users/{id}"));
        let request = UpdateRoleRequest { role };
        let response = self.client.patch(url).json(&request).send().await.map_err(transport)?;
        ensure_success(response, "user").await.map(drop)
    }

    /// Delete a user record.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("users/{id}"));
        let response = self.client.delete(url).send().await.map_err(transport)?;
        ensure_success(response, "user").await.map(drop)
    }

    /// List a learner's bookings.
    pub async fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        self.get_json(&format!("bookings/{email}"), "bookings").await
    }

    /// Create a booking.
    pub async fn create_booking(&self, request: &NewBookingRequest) -> Result<(), ApiError> {
        let url = self.api_url("bookings");
        let response = self.client.post(url).json(request).send().await.map_err(transport)?;
        ensure_success(response, "booking").await.map(drop)
    }

    /// Mark a booking as reviewed.
    pub async fn mark_booking_reviewed(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("bookings/reviewed/{id}"));
        let response = self.client.patch(url).send().await.map_err(transport)?;
        ensure_success(response, "booking").await.map(drop)
    }

    /// Fetch aggregate platform counts.
    pub async fn dashboard_stats(&self) -> Result<PlatformStats, ApiError> {
        self.get_json("dashboard/stats", "stats").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<T, ApiError> {
        let url = self.api_url(path);
        debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = ensure_success(response, resource).await?;
        response.json().await.map_err(transport)
    }
}

/// The resolver's role lookup, keyed by the identity's email.
#[async_trait(?Send)]
impl RoleSource for TutorHiveClient {
    async fn role_for(&self, email: &str) -> Result<Option<UserRole>, ApiError> {
        Ok(self.user_by_email(email).await?.map(|record| record.role))
    }
}

#[async_trait(?Send)]
impl BookingApi for TutorHiveClient {
    async fn create_booking(&self, request: &NewBookingRequest) -> Result<(), ApiError> {
        TutorHiveClient::create_booking(self, request).await
    }

    async fn mark_reviewed(&self, booking_id: &str) -> Result<(), ApiError> {
        self.mark_booking_reviewed(booking_id).await
    }

    async fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        TutorHiveClient::bookings_for(self, email).await
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::NetworkFailure(err.to_string())
}

async fn ensure_success(response: Response, resource: &'static str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let envelope = response.json::<ErrorResponse>().await.ok();
    debug!(status = status.as_u16(), resource, "request failed");
    Err(map_status(status.as_u16(), resource, envelope))
}

/// Single place where HTTP statuses become [`ApiError`] values.
pub(crate) fn map_status(
    status: u16,
    resource: &'static str,
    envelope: Option<ErrorResponse>,
) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthenticated,
        404 => ApiError::NotFound(resource),
        400 | 409 | 422 => {
            let message = envelope
                .map(|body| body.to_string())
                .unwrap_or_else(|| "request rejected".to_string());
            ApiError::ValidationFailed(message)
        }
        other => ApiError::UnexpectedStatus(other),
    }
}
