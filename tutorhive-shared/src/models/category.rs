use serde::{Deserialize, Serialize};

/// A language tile on the landing page, linking to `/find-tutors/:path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageCategory {
    #[serde(rename = "_id")]
    pub id: String,

    /// Human-readable language name, e.g. "Spanish".
    pub title: String,

    /// Icon key understood by the landing page.
    pub icon: String,

    /// Route segment used to filter tutors, usually the lowercase title.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_shape() {
        let json = r#"{"_id":"c1","title":"Spanish","icon":"FaLanguage","path":"spanish"}"#;
        let category: LanguageCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.title, "Spanish");
        assert_eq!(category.path, "spanish");
    }
}
