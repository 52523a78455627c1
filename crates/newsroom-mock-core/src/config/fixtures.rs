//! Declarative seed state for test scenarios.

use serde::{Deserialize, Serialize};

/// One pre-seeded subscription.
///
/// A fixture behaves like a subscribe call that already happened: it
/// registers `app` in the universe registry and marks every id in `sv_id`
/// as subscribed for `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFixture {
    pub universe: String,
    pub app: String,
    pub email: String,
    /// Comma-separated distribution list ids, as on the wire
    pub sv_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_ext_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_minimal_fixture_deserializes() {
        let fixture: SeedFixture = serde_json::from_value(json!({
            "universe": "DIGIT",
            "app": "myapp",
            "email": "a@example.com",
            "sv_id": "5,6"
        }))
        .unwrap();
        assert_eq!(fixture.language, None);
        assert!(fixture.topic_ext_ids.is_empty());
    }

    #[rstest]
    fn test_fixture_roundtrip() {
        let fixture = SeedFixture {
            universe: "DIGIT".to_owned(),
            app: "myapp".to_owned(),
            email: "a@example.com".to_owned(),
            sv_id: "5".to_owned(),
            language: Some("fr".to_owned()),
            topic_ext_ids: vec!["tag-1".to_owned()],
        };
        let value = serde_json::to_value(&fixture).unwrap();
        let back: SeedFixture = serde_json::from_value(value).unwrap();
        assert_eq!(back, fixture);
    }
}
