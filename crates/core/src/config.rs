//! Settings and the API secret.
//!
//! The secret comes from a TOML secrets file, falling back to the provider's
//! environment variable (with `.env` loaded first). It is read once at
//! startup and handed to the dispatcher; nothing else reads it.

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tokio::fs;
use tracing::{debug, info};

use crate::{error::ConfigurationError, provider::Provider};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// An API key that passed validation. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(ConfigurationError::InvalidApiKey {
                reason: "key is empty".to_string(),
            });
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigurationError::InvalidApiKey {
                reason: "key contains whitespace or control characters".to_string(),
            });
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// The provider plus whatever key was found for it, not yet validated.
#[derive(Clone)]
pub struct Credentials {
    pub provider: Provider,
    pub api_key: Option<String>,
}

impl Credentials {
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    /// Validate the key. Missing and malformed keys are both configuration errors.
    pub fn secret(&self) -> Result<Secret, ConfigurationError> {
        let config = self.provider.config();
        match self.api_key.as_deref() {
            None => Err(ConfigurationError::MissingApiKey {
                provider_name: self.provider.name().to_string(),
                secrets_key: config.secrets_key.to_string(),
                env_var: config.env_var.to_string(),
            }),
            Some(raw) => Secret::parse(raw),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Contents of `secrets.toml`.
#[derive(Default, Deserialize)]
pub struct SecretsFile {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub xai_api_key: Option<String>,
    #[serde(default)]
    pub settings: FileSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileSettings {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub temperature: Option<f32>,
}

impl SecretsFile {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigurationError> {
        toml::from_str(contents).map_err(|e| ConfigurationError::SecretsMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn key_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Gemini => self.gemini_api_key.as_deref(),
            Provider::Openai => self.openai_api_key.as_deref(),
            Provider::Grok => self.xai_api_key.as_deref(),
        }
    }
}

/// Command-line overrides applied on top of the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub secrets_path: Option<PathBuf>,
    pub provider: Option<Provider>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub model: String,
    pub api_url: String,
    pub request_timeout: Duration,
    pub temperature: f32,
    pub secrets_path: Option<PathBuf>,
}

/// Get the per-user config directory for tubeseo
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tubeseo")
}

/// Default locations of the secrets file, most specific first
pub fn secrets_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(".tubeseo").join("secrets.toml"),
        get_config_dir().join("secrets.toml"),
    ]
}

/// Read a secrets file
pub async fn load_secrets_file(path: &Path) -> Result<SecretsFile, ConfigurationError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| ConfigurationError::SecretsUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    SecretsFile::parse(&contents, path)
}

impl Settings {
    /// Load settings from the secrets file and the environment.
    ///
    /// An explicit `secrets_path` must exist. The default locations are
    /// optional.
    pub async fn load(overrides: Overrides) -> Result<Self, ConfigurationError> {
        dotenvy::dotenv().ok();

        let located = match &overrides.secrets_path {
            Some(path) => Some(path.clone()),
            None => secrets_search_paths().into_iter().find(|p| p.is_file()),
        };

        let file = match &located {
            Some(path) => {
                info!(path = %path.display(), "Loading secrets file");
                Some(load_secrets_file(path).await?)
            }
            None => {
                debug!("No secrets file found, using environment only");
                None
            }
        };

        let mut settings = Self::from_sources(file, |name| std::env::var(name).ok(), overrides)?;
        settings.secrets_path = located;
        Ok(settings)
    }

    /// Resolve settings from an already-read file and an environment lookup.
    /// The file wins over the environment; overrides win over both.
    pub fn from_sources(
        file: Option<SecretsFile>,
        env: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Result<Self, ConfigurationError> {
        let file = file.unwrap_or_default();
        let provider = overrides
            .provider
            .or(file.settings.provider)
            .unwrap_or_default();
        let config = provider.config();

        let api_key = file
            .key_for(provider)
            .map(str::to_string)
            .or_else(|| env(config.env_var));

        // Endpoint and model in the file belong to the file's provider.
        let file_matches = file.settings.provider.unwrap_or_default() == provider;
        let file_model = file.settings.model.filter(|_| file_matches);
        let file_api_url = file.settings.api_url.filter(|_| file_matches);

        let request_timeout_secs = file
            .settings
            .request_timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(ConfigurationError::InvalidSetting {
                key: "request_timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let temperature = file.settings.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigurationError::InvalidSetting {
                key: "temperature".to_string(),
                reason: format!("{temperature} is outside 0.0..=2.0"),
            });
        }

        Ok(Self {
            credentials: Credentials::new(provider, api_key),
            model: overrides
                .model
                .or(file_model)
                .unwrap_or_else(|| config.model.to_string()),
            api_url: file_api_url.unwrap_or_else(|| config.api_url.to_string()),
            request_timeout: Duration::from_secs(request_timeout_secs),
            temperature,
            secrets_path: None,
        })
    }

    pub fn provider(&self) -> Provider {
        self.credentials.provider
    }
}
