pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::prompt::Role;

pub use openai::OpenAiClient;

// Sampling is fixed so the same question gets the same answer where possible
pub const TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

/// Anything that can turn a chat completion request into response text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

/// Builds the `[system, user]` pair sent for one exchange.
pub fn build_messages(user_text: &str, system_prompt: &str) -> Vec<Message> {
    vec![
        Message {
            role: ChatRole::System,
            content: system_prompt.to_string(),
        },
        Message {
            role: ChatRole::User,
            content: user_text.trim().to_string(),
        },
    ]
}

// Shared by every worker; holds no per-request state
#[derive(Clone)]
pub struct Gateway {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl Gateway {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the completion endpoint for an answer in the voice of `role`.
    ///
    /// The caller rejects empty input. A failed call is not retried.
    pub async fn answer(&self, user_text: &str, role: Role) -> Result<String, GatewayError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: build_messages(user_text, role.system_prompt()),
            temperature: TEMPERATURE,
        };

        info!("Requesting completion as {} with model {}", role.id(), self.model);
        debug!("User text: {}", user_text.trim());

        let answer = self.client.complete(&request).await?;
        info!("Response length: {} characters", answer.chars().count());
        Ok(answer)
    }
}
