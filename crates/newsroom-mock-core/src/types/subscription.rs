//! Subscription state and the API-shaped response record.

use crate::config::MockSettings;
use crate::feedback;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State stored per (universe, distribution list, email) triple.
///
/// Entries are never removed: unsubscribing flips `subscribed` off and
/// clears the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEntry {
    /// Whether the address is currently subscribed
    pub subscribed: bool,
    /// Language the subscription was made in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Opaque topic tags carried through from the subscribe call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_ext_ids: Vec<String>,
}

impl SubscriptionEntry {
    /// An active subscription.
    pub fn subscribed(language: &str, topic_ext_ids: Vec<String>) -> Self {
        Self {
            subscribed: true,
            language: Some(language.to_owned()),
            topic_ext_ids,
        }
    }

    /// A cancelled subscription; only the `subscribed` flag survives.
    pub fn unsubscribed() -> Self {
        Self {
            subscribed: false,
            language: None,
            topic_ext_ids: Vec::new(),
        }
    }
}

/// Subscription state: universe acronym → distribution list id → email →
/// entry. `BTreeMap` keeps the "list everything" iteration order stable
/// across runs.
pub type SubscriptionStore = BTreeMap<String, BTreeMap<String, BTreeMap<String, SubscriptionEntry>>>;

/// Registry of the universe last used by each calling application.
pub type UniverseRegistry = BTreeMap<String, String>;

/// One element of the JSON array the mocked API returns.
///
/// The shape reproduces the real service's responses: contact fields are
/// explicit nulls, `universAcronym` keeps the service's own spelling, and
/// the links embed a fixed `RANDOM_STRING` token where the service puts a
/// per-subscription secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub response_type: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organisation: Option<String>,
    pub country: Option<String>,
    pub position: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linked_in: Option<String>,
    pub phone: Option<String>,
    pub organisation_short: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub media: Option<String>,
    pub website: Option<String>,
    pub role: Option<String>,
    pub universe_id: String,
    pub universe_name: String,
    pub univers_acronym: String,
    pub newsletter_id: String,
    pub newsletter_name: String,
    pub status: String,
    pub unsubscription_link: String,
    pub is_new_user: Option<bool>,
    pub host_by: String,
    pub profile_link: String,
    pub is_new_subscription: bool,
    pub feedback_message: String,
    pub language: String,
    pub frequency: String,
    pub default_language: String,
    pub pattern: Option<String>,
}

impl SubscriptionRecord {
    /// Builds the record for one (universe, distribution list, email)
    /// triple.
    ///
    /// `is_new_subscription` must reflect the state *before* the current
    /// call mutates it.
    pub fn generate(
        settings: &MockSettings,
        universe: &str,
        email: &str,
        sv_id: &str,
        language: &str,
        is_new_subscription: bool,
    ) -> Self {
        Self {
            response_type: "json".to_owned(),
            email: email.to_owned(),
            first_name: None,
            last_name: None,
            organisation: None,
            country: None,
            position: None,
            twitter: None,
            facebook: None,
            linked_in: None,
            phone: None,
            organisation_short: None,
            address: None,
            address2: None,
            post_code: None,
            city: None,
            department: None,
            media: None,
            website: None,
            role: None,
            universe_id: settings.universe_id.clone(),
            universe_name: settings.universe_name.clone(),
            univers_acronym: universe.to_owned(),
            newsletter_id: sv_id.to_owned(),
            newsletter_name: settings.newsletter_name.clone(),
            status: "Valid".to_owned(),
            unsubscription_link: format!(
                "https://{}/newsroom/{universe}/user-subscriptions/unsubscribe/{email}/RANDOM_STRING",
                settings.api_host
            ),
            is_new_user: None,
            host_by: format!("{universe} Newsroom"),
            profile_link: format!(
                "https://{}/newsroom/{universe}/user-profile/123456789",
                settings.api_host
            ),
            is_new_subscription,
            feedback_message: feedback::feedback_message(is_new_subscription, language).to_owned(),
            language: language.to_owned(),
            frequency: "On demand".to_owned(),
            default_language: "0".to_owned(),
            pattern: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn generate(language: &str, is_new: bool) -> Value {
        let record = SubscriptionRecord::generate(
            &MockSettings::default(),
            "DIGIT",
            "a@example.com",
            "5",
            language,
            is_new,
        );
        serde_json::to_value(record).unwrap()
    }

    #[rstest]
    fn test_record_identifiers() {
        let record = generate("en", true);
        assert_eq!(record["responseType"], "json");
        assert_eq!(record["email"], "a@example.com");
        assert_eq!(record["universeId"], "1");
        assert_eq!(record["universeName"], "TEST FORUM");
        assert_eq!(record["universAcronym"], "DIGIT");
        assert_eq!(record["newsletterId"], "5");
        assert_eq!(record["newsletterName"], "Test newsletter distribution list");
        assert_eq!(record["status"], "Valid");
        assert_eq!(record["frequency"], "On demand");
        assert_eq!(record["defaultLanguage"], "0");
    }

    #[rstest]
    fn test_record_links() {
        let record = generate("en", true);
        assert_eq!(
            record["unsubscriptionLink"],
            "https://ec.europa.eu/newsroom/DIGIT/user-subscriptions/unsubscribe/a@example.com/RANDOM_STRING"
        );
        assert_eq!(
            record["profileLink"],
            "https://ec.europa.eu/newsroom/DIGIT/user-profile/123456789"
        );
        assert_eq!(record["hostBy"], "DIGIT Newsroom");
    }

    #[rstest]
    #[case("firstName")]
    #[case("lastName")]
    #[case("organisation")]
    #[case("country")]
    #[case("linkedIn")]
    #[case("organisationShort")]
    #[case("address2")]
    #[case("postCode")]
    #[case("isNewUser")]
    #[case("pattern")]
    fn test_record_null_placeholders_are_present(#[case] field: &str) {
        let record = generate("en", true);
        assert!(record[field].is_null(), "{field} must serialize as null");
    }

    #[rstest]
    #[case(true, "Thanks for Signing Up to the service: Test Newsletter Service")]
    #[case(
        false,
        "A subscription for this service is already registered for this email address"
    )]
    fn test_record_feedback_follows_is_new(#[case] is_new: bool, #[case] message: &str) {
        let record = generate("en", is_new);
        assert_eq!(record["isNewSubscription"], json!(is_new));
        assert_eq!(record["feedbackMessage"], message);
    }

    #[rstest]
    fn test_entry_roundtrip() {
        let entry = SubscriptionEntry::subscribed("fr", vec!["tag-1".to_owned()]);
        let value = serde_json::to_value(&entry).unwrap();
        let back: SubscriptionEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[rstest]
    fn test_unsubscribed_entry_is_bare() {
        let entry = SubscriptionEntry::unsubscribed();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"subscribed": false})
        );
    }

    #[rstest]
    fn test_entry_defaults_when_fields_absent() {
        let entry: SubscriptionEntry = serde_json::from_value(json!({"subscribed": true})).unwrap();
        assert_eq!(entry.language, None);
        assert!(entry.topic_ext_ids.is_empty());
    }
}
