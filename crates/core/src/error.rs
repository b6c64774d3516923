use std::path::PathBuf;
use thiserror::Error;

/// The secret or the settings around it are unusable. Raised before any
/// request leaves the process.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing API key for {provider_name}: add {secrets_key} to the secrets file or set {env_var}")]
    MissingApiKey {
        provider_name: String,
        secrets_key: String,
        env_var: String,
    },

    #[error("Invalid API key: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Failed to read secrets file {path}: {reason}")]
    SecretsUnreadable { path: PathBuf, reason: String },

    #[error("Malformed secrets file {path}: {reason}")]
    SecretsMalformed { path: PathBuf, reason: String },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

/// The model endpoint could not produce a response.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },

    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// Rejected by the form before submission.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Please provide the video script or summary")]
    MissingScript,

    #[error("Select at least one section to generate")]
    NoSections,

    #[error("Number of titles must be between {min} and {max}, got {value}")]
    TitleCountOutOfRange { value: usize, min: usize, max: usize },
}

/// Everything a single submission can fail with.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
