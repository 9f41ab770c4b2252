/// The authenticated principal as reported by the identity provider.
///
/// Produced only by the auth bridge; the application observes it and never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-issued stable id.
    pub uid: String,

    /// Email address; the key for the remote role lookup.
    pub email: String,

    /// Optional display name set at registration.
    pub display_name: Option<String>,
}

impl Identity {
    /// Name suitable for greeting the user.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_prefers_name_over_email() {
        let mut identity = Identity {
            uid: "u1".to_string(),
            email: "asha@example.com".to_string(),
            display_name: Some("Asha".to_string()),
        };
        assert_eq!(identity.display_label(), "Asha");

        identity.display_name = None;
        assert_eq!(identity.display_label(), "asha@example.com");
    }
}
