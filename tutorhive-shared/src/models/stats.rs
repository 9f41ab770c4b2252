use serde::{Deserialize, Serialize};

/// Aggregate counts from `GET /dashboard/stats`.
///
/// Older deployments only report the first three fields; the optional ones
/// are tolerated so both the landing-page strip and the dashboard overview
/// can consume the same response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default)]
    pub total_tutors: u64,

    #[serde(default)]
    pub total_bookings: u64,

    #[serde(default)]
    pub pending_reviews: u64,

    #[serde(default)]
    pub registered_users: Option<u64>,

    #[serde(default)]
    pub languages_taught: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_tolerate_missing_optional_fields() {
        let json = r#"{"totalTutors":12,"totalBookings":40,"pendingReviews":5}"#;
        let stats: PlatformStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_tutors, 12);
        assert_eq!(stats.pending_reviews, 5);
        assert_eq!(stats.registered_users, None);
        assert_eq!(stats.languages_taught, None);
    }

    #[test]
    fn stats_full_response() {
        let json = r#"{
            "totalTutors": 12,
            "totalBookings": 40,
            "pendingReviews": 5,
            "registeredUsers": 980,
            "languagesTaught": 14
        }"#;
        let stats: PlatformStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.registered_users, Some(980));
        assert_eq!(stats.languages_taught, Some(14));
    }
}
