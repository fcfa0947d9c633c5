use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::GatewayError;
use crate::model::{CompletionClient, CompletionRequest};

// Client for an OpenAI-compatible chat completion endpoint
pub struct OpenAiClient {
    api_base: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiClient {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        info!("Using chat completion endpoint at: {}", config.api_base);
        Self::new(config.api_base.clone(), config.api_key.clone())
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingCredential)?;
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending {} messages to {}", request.messages.len(), url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("Completion request failed with status {}", status);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        debug!("Response JSON: {}", response_json);

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                GatewayError::Malformed("missing choices[0].message.content".to_string())
            })?;

        if content.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}
