use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    config::{Secret, Settings},
    error::ServiceError,
};

/// A hosted model that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, secret: &Secret, prompt: &str) -> Result<String, ServiceError>;
}

/// Client for OpenAI-compatible `chat/completions` endpoints.
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    api_url: String,
    model: String,
    temperature: f32,
}

impl ChatCompletionsClient {
    pub fn new(
        api_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            model: model.into(),
            temperature,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        Self::new(
            settings.api_url.clone(),
            settings.model.clone(),
            settings.temperature,
            settings.request_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsClient {
    async fn generate(&self, secret: &Secret, prompt: &str) -> Result<String, ServiceError> {
        info!(
            model = %self.model,
            prompt_chars = prompt.len(),
            "Sending generation request"
        );
        let started = Instant::now();

        let response = self
            .http
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", secret.expose()))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": self.temperature,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response = response.json::<serde_json::Value>().await?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Response received");

        extract_content(&response)
    }
}

/// Pull the text out of a chat completions response body.
pub fn extract_content(response: &serde_json::Value) -> Result<String, ServiceError> {
    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ServiceError::InvalidResponse {
            reason: format!("no message content in {response}"),
        })?;

    if content.trim().is_empty() {
        return Err(ServiceError::EmptyResponse);
    }

    Ok(content.to_string())
}
