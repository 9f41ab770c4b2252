//! Tests for the API client
//!
//! Validates URL construction and the single status-to-error mapping used by
//! every endpoint method.

#[cfg(test)]
mod tests {
    use crate::api::{TutorHiveClient, map_status};
    use shared::models::{ApiError, ErrorResponse};

    #[test]
    fn api_url_joins_without_duplicate_slashes() {
        let client = TutorHiveClient::new("http://localhost:5000/");
        assert_eq!(client.api_url("tutors"), "http://localhost:5000/tutors");
        assert_eq!(client.api_url("/tutors/t1"), "http://localhost:5000/tutors/t1");
    }

    #[test]
    fn api_url_with_relative_base() {
        let client = TutorHiveClient::new("/api");
        assert_eq!(
            client.api_url("bookings/reviewed/b1"),
            "/api/bookings/reviewed/b1"
        );
    }

    #[test]
    fn auth_statuses_map_to_unauthenticated() {
        assert_eq!(map_status(401, "user", None), ApiError::Unauthenticated);
        assert_eq!(map_status(403, "user", None), ApiError::Unauthenticated);
    }

    #[test]
    fn missing_resource_maps_to_not_found() {
        assert_eq!(map_status(404, "tutor", None), ApiError::NotFound("tutor"));
    }

    #[test]
    fn rejection_statuses_map_to_validation_failed() {
        for status in [400, 409, 422] {
            assert!(matches!(
                map_status(status, "booking", None),
                ApiError::ValidationFailed(_)
            ));
        }
    }

    #[test]
    fn validation_error_carries_backend_message() {
        let envelope = ErrorResponse::new("price must be positive");
        assert_eq!(
            map_status(400, "tutor", Some(envelope)),
            ApiError::ValidationFailed("price must be positive".to_string())
        );
    }

    #[test]
    fn other_statuses_map_to_unexpected() {
        assert_eq!(map_status(500, "stats", None), ApiError::UnexpectedStatus(500));
        assert_eq!(map_status(503, "stats", None), ApiError::UnexpectedStatus(503));
    }
}
