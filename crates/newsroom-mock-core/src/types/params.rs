//! Serde views of the simulated API's request bodies.
//!
//! Required fields missing from a body fail deserialization; the resulting
//! error propagates out of the handler instead of being defaulted, since a
//! malformed body means the test harness itself is broken.

use serde::Deserialize;

/// The `{"subscription": {...}}` wrapper every body-carrying endpoint uses.
#[derive(Debug, Deserialize)]
pub struct SubscriptionEnvelope<T> {
    pub subscription: T,
}

/// Body of a list-subscriptions call.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "universeAcronym")]
    pub universe_acronym: String,
    pub email: String,
    /// Comma-separated filter; empty means every list in the universe
    pub sv_id: String,
}

/// Body of a subscribe call.
#[derive(Debug, Deserialize)]
pub struct SubscribeParams {
    #[serde(rename = "universeAcronym")]
    pub universe_acronym: String,
    /// Calling site identifier; keys the universe registry
    #[serde(rename = "topicExtWebsite")]
    pub topic_ext_website: String,
    pub email: String,
    /// Comma-separated primary distribution list ids
    pub sv_id: String,
    /// Comma-separated related ids, appended after the primary set
    #[serde(rename = "relatedSv_Id")]
    pub related_sv_id: Option<String>,
    pub language: Option<String>,
    /// Comma-separated opaque topic tags
    #[serde(rename = "topicExtId")]
    pub topic_ext_id: Option<String>,
}

/// Splits a comma-separated id set.
///
/// The empty string is the empty set (the "no filter" marker on listing
/// calls); anything else splits verbatim, keeping elements as sent.
pub fn split_ids(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", &[])]
    #[case("5", &["5"])]
    #[case("1,2", &["1", "2"])]
    #[case("1,,2", &["1", "", "2"])]
    #[case(" 1, 2", &[" 1", " 2"])]
    fn test_split_ids(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(split_ids(raw), expected);
    }

    #[rstest]
    fn test_list_params_deserialize() {
        let body = json!({
            "subscription": {
                "universeAcronym": "DIGIT",
                "email": "a@example.com",
                "sv_id": "5,6"
            }
        });
        let envelope: SubscriptionEnvelope<ListParams> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.subscription.universe_acronym, "DIGIT");
        assert_eq!(envelope.subscription.email, "a@example.com");
        assert_eq!(envelope.subscription.sv_id, "5,6");
    }

    #[rstest]
    fn test_subscribe_params_optional_fields_default() {
        let body = json!({
            "subscription": {
                "universeAcronym": "DIGIT",
                "topicExtWebsite": "myapp",
                "email": "a@example.com",
                "sv_id": "5"
            }
        });
        let envelope: SubscriptionEnvelope<SubscribeParams> = serde_json::from_value(body).unwrap();
        let params = envelope.subscription;
        assert_eq!(params.related_sv_id, None);
        assert_eq!(params.language, None);
        assert_eq!(params.topic_ext_id, None);
    }

    #[rstest]
    fn test_subscribe_params_full() {
        let body = json!({
            "subscription": {
                "universeAcronym": "DIGIT",
                "topicExtWebsite": "myapp",
                "email": "a@example.com",
                "sv_id": "1,2",
                "relatedSv_Id": "3",
                "language": "fr",
                "topicExtId": "tag-1,tag-2"
            }
        });
        let envelope: SubscriptionEnvelope<SubscribeParams> = serde_json::from_value(body).unwrap();
        let params = envelope.subscription;
        assert_eq!(params.related_sv_id.as_deref(), Some("3"));
        assert_eq!(params.language.as_deref(), Some("fr"));
        assert_eq!(params.topic_ext_id.as_deref(), Some("tag-1,tag-2"));
    }

    #[rstest]
    #[case(json!({"subscription": {"email": "a@example.com", "sv_id": ""}}))]
    #[case(json!({"subscription": {"universeAcronym": "DIGIT", "sv_id": ""}}))]
    #[case(json!({"universeAcronym": "DIGIT", "email": "a@example.com", "sv_id": ""}))]
    fn test_missing_required_field_fails(#[case] body: serde_json::Value) {
        let result: Result<SubscriptionEnvelope<ListParams>, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
