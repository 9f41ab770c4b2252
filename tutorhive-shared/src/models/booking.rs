use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A learner's reservation against a tutor listing.
///
/// `reviewed` moves from `false` to `true` exactly once, via
/// `PATCH /bookings/reviewed/:id`, and never reverses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Backend-issued record id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Id of the booked tutor listing.
    pub tutor_id: String,

    /// Email of the learner who booked.
    pub email: String,

    pub price: f64,
    pub language: String,
    pub image: String,
    pub booked_at: DateTime<Utc>,

    #[serde(default)]
    pub reviewed: bool,
}

/// Payload for `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub tutor_id: String,
    pub tutor_email: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    /// Email of the booking learner.
    pub email: String,
    pub booked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_missing_reviewed_flag_defaults_to_false() {
        let json = r#"{
            "_id": "b1",
            "tutorId": "t1",
            "email": "asha@example.com",
            "price": 22.5,
            "language": "Spanish",
            "image": "",
            "bookedAt": "2026-02-01T12:00:00Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert!(!booking.reviewed);
        assert_eq!(booking.tutor_id, "t1");
    }

    #[test]
    fn new_booking_request_wire_shape() {
        let request = NewBookingRequest {
            tutor_id: "t1".to_string(),
            tutor_email: "maria@tutors.example".to_string(),
            image: "https://img.example/maria.jpg".to_string(),
            language: "Spanish".to_string(),
            price: 22.5,
            email: "asha@example.com".to_string(),
            booked_at: "2026-02-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"tutorId\":\"t1\""));
        assert!(json.contains("\"tutorEmail\":\"maria@tutors.example\""));
        assert!(json.contains("\"bookedAt\""));
    }

    #[test]
    fn booking_roundtrip() {
        let booking = Booking {
            id: "b1".to_string(),
            tutor_id: "t1".to_string(),
            email: "asha@example.com".to_string(),
            price: 22.5,
            language: "Spanish".to_string(),
            image: String::new(),
            booked_at: "2026-02-01T12:00:00Z".parse().unwrap(),
            reviewed: true,
        };
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }
}
