//! Error types for settings and fixture loading.

use std::fmt;

/// Configuration loading error
#[derive(Debug)]
pub enum ConfigError {
    /// File read error
    Io(std::io::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// Invalid glob pattern
    Pattern(glob::PatternError),
    /// Unknown file type
    UnknownFileType(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "File read error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON parsing error: {}", e),
            ConfigError::Yaml(e) => write!(f, "YAML parsing error: {}", e),
            ConfigError::Pattern(e) => write!(f, "Invalid glob pattern: {}", e),
            ConfigError::UnknownFileType(path) => write!(f, "Unknown file type: {}", path),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::Pattern(e) => Some(e),
            ConfigError::UnknownFileType(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

impl From<glob::PatternError> for ConfigError {
    fn from(err: glob::PatternError) -> Self {
        ConfigError::Pattern(err)
    }
}
