//! Settings of the simulated service.

use serde::{Deserialize, Serialize};

/// Knobs of the simulated Newsroom deployment.
///
/// Defaults reproduce the service the mock stands in for; most tests never
/// touch them. Fields missing from a settings file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockSettings {
    /// Host the match predicate compares against
    pub api_host: String,
    /// Path prefix of the mocked API, with trailing slash
    pub api_base_path: String,
    /// Universe numeric identifier echoed in responses
    pub universe_id: String,
    /// Universe display name echoed in responses
    pub universe_name: String,
    /// Distribution list display name echoed in responses
    pub newsletter_name: String,
    /// Language used when a subscribe call carries none
    pub default_language: String,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            api_host: "ec.europa.eu".to_owned(),
            api_base_path: "/newsroom/api/v1/".to_owned(),
            universe_id: "1".to_owned(),
            universe_name: "TEST FORUM".to_owned(),
            newsletter_name: "Test newsletter distribution list".to_owned(),
            default_language: "en".to_owned(),
        }
    }
}

impl MockSettings {
    /// Full path of one of the mocked operations.
    pub fn endpoint(&self, operation: &str) -> String {
        format!("{}{}", self.api_base_path, operation)
    }
}
