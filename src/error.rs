use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistStarsError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Inaccessible: {0}")]
    Inaccessible(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Environment error: {0}")]
    EnvError(String),
}

impl GistStarsError {
    /// Text shown on the badge when this error reaches the end user.
    pub fn pretty_message(&self) -> &str {
        match self {
            GistStarsError::NotFound(message) => message,
            GistStarsError::SchemaValidation(_) | GistStarsError::InvalidResponse(_) => {
                "invalid response data"
            }
            GistStarsError::AuthError(_) => "auth required",
            GistStarsError::EnvError(_) => "improperly configured",
            GistStarsError::NetworkError(_)
            | GistStarsError::JsonError(_)
            | GistStarsError::IoError(_)
            | GistStarsError::Inaccessible(_) => "inaccessible",
        }
    }
}

pub type Result<T> = std::result::Result<T, GistStarsError>;
