use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid {kind} searched for: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Malformed upstream data: {0}")]
    MalformedResource(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    pub fn summoner_not_found(name: &str) -> Self {
        AppError::NotFound {
            kind: "Summoner",
            name: name.to_string(),
        }
    }

    pub fn champion_not_found(name: &str) -> Self {
        AppError::NotFound {
            kind: "Champion",
            name: name.to_string(),
        }
    }

    /// Malformed payloads are reported to the user the same way as a failed lookup.
    pub fn into_lookup_failure(self, kind: &'static str, name: &str) -> Self {
        match self {
            AppError::MalformedResource(detail) => {
                tracing::warn!(%kind, %name, %detail, "treating malformed payload as not found");
                AppError::NotFound {
                    kind,
                    name: name.to_string(),
                }
            }
            other => other,
        }
    }
}
