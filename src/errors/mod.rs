use thiserror::Error;

/// Main error type for petfriends operations
#[derive(Error, Debug)]
pub enum PetFriendsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Smoke run failed: {0}")]
    SmokeError(String),
}

/// Convenience Result type that uses PetFriendsError
pub type Result<T> = std::result::Result<T, PetFriendsError>;
