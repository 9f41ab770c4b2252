use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tutor listing as returned by `GET /tutors`.
///
/// `name` and `user_email` identify the account that owns the listing;
/// `tutor_name` and `tutor_email` describe the tutor being advertised. The
/// review count is an aggregate maintained by the backend and is never
/// written from the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    /// Backend-issued record id.
    #[serde(rename = "_id")]
    pub id: String,

    pub tutor_name: String,
    pub tutor_email: String,

    /// Display name of the listing owner.
    pub name: String,

    /// Email of the listing owner.
    pub user_email: String,

    pub image: String,
    pub language: String,

    /// Hourly price; always positive.
    pub price: f64,

    pub description: String,

    /// Server-derived review count.
    #[serde(default)]
    pub review: u32,

    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /tutors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTutorRequest {
    pub name: String,
    pub user_email: String,
    pub tutor_name: String,
    pub tutor_email: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    pub description: String,
    /// Fixed at zero on creation.
    pub review: u32,
    pub created_at: DateTime<Utc>,
}

/// Payload for `PATCH /tutors/:id`; only the editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorRequest {
    pub tutor_name: String,
    pub tutor_email: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutor_wire_shape_is_camel_case() {
        let json = r#"{
            "_id": "t1",
            "tutorName": "Maria Lopez",
            "tutorEmail": "maria@tutors.example",
            "name": "Asha",
            "userEmail": "asha@example.com",
            "image": "https://img.example/maria.jpg",
            "language": "Spanish",
            "price": 22.5,
            "description": "Conversational Spanish.",
            "review": 3,
            "createdAt": "2026-01-15T09:30:00Z"
        }"#;

        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.id, "t1");
        assert_eq!(tutor.tutor_name, "Maria Lopez");
        assert_eq!(tutor.user_email, "asha@example.com");
        assert_eq!(tutor.review, 3);

        let out = serde_json::to_string(&tutor).unwrap();
        assert!(out.contains("\"tutorEmail\":\"maria@tutors.example\""));
        assert!(out.contains("\"createdAt\""));
    }

    #[test]
    fn tutor_missing_review_count_defaults_to_zero() {
        let json = r#"{
            "_id": "t2",
            "tutorName": "Ken",
            "tutorEmail": "ken@tutors.example",
            "name": "Asha",
            "userEmail": "asha@example.com",
            "image": "",
            "language": "Japanese",
            "price": 30.0,
            "description": "",
            "createdAt": "2026-01-15T09:30:00Z"
        }"#;
        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.review, 0);
    }

    #[test]
    fn update_request_carries_only_editable_fields() {
        let request = UpdateTutorRequest {
            tutor_name: "Maria Lopez".to_string(),
            tutor_email: "maria@tutors.example".to_string(),
            image: "https://img.example/maria.jpg".to_string(),
            language: "Spanish".to_string(),
            price: 25.0,
            description: "Updated.".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("review"));
        assert!(!json.contains("userEmail"));
        assert!(!json.contains("createdAt"));
    }
}
