//! Async loading of settings and seed fixtures from disk.

use crate::config::error::ConfigError;
use crate::config::fixtures::SeedFixture;
use crate::config::parser;
use crate::config::settings::MockSettings;
use tokio::fs;

/// Load settings from a YAML or JSON file.
pub async fn load_settings(path: &str) -> Result<MockSettings, ConfigError> {
    let content = fs::read_to_string(path).await?;
    parser::parse_config(&content, path)
}

/// Load seed fixtures from a path or glob pattern.
///
/// Each matched file holds an array of fixtures; batches are concatenated
/// in the alphabetical order `glob` yields, so repeated runs seed
/// identical state.
pub async fn load_fixtures(pattern: &str) -> Result<Vec<SeedFixture>, ConfigError> {
    let mut fixtures = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| ConfigError::Io(e.into_error()))?;
        let content = fs::read_to_string(&path).await?;
        let path = path.to_string_lossy();
        let mut batch: Vec<SeedFixture> = parser::parse_config(&content, &path)?;
        fixtures.append(&mut batch);
    }
    Ok(fixtures)
}
