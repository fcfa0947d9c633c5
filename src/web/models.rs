use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::prompt::Role;
use crate::web::markdown::render_markdown;

pub const REMEDIATION_HINT: &str =
    "依存パッケージのバージョンや API キーの設定を確認してください。";

/// Body of the HTML form and of `POST /api/answer`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl AskRequest {
    pub fn role_id(&self) -> &str {
        self.role.as_deref().unwrap_or(Role::DEFAULT.id())
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub role: Role,
    pub exchange_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RoleOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// What the result region shows after a submission.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Answer { text: String, html: String },
    Warning { message: String },
    Error { message: String, hint: Option<&'static str> },
}

impl From<Result<String, SubmitError>> for Outcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(text) => Outcome::Answer {
                html: render_markdown(&text),
                text,
            },
            Err(err @ SubmitError::Validation) => Outcome::Warning { message: err.to_string() },
            Err(err @ SubmitError::Configuration) => Outcome::Error {
                message: err.to_string(),
                hint: None,
            },
            Err(err @ SubmitError::Gateway(_)) => Outcome::Error {
                message: err.to_string(),
                hint: Some(REMEDIATION_HINT),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub roles: Vec<RoleOption>,
    pub text: String,
    pub outcome: Option<Outcome>,
}

impl PageView {
    pub fn new(selected: Role, text: impl Into<String>) -> Self {
        let roles = Role::ALL
            .iter()
            .map(|role| RoleOption {
                id: role.id(),
                label: role.label(),
                selected: *role == selected,
            })
            .collect();

        Self {
            roles,
            text: text.into(),
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new(Role::DEFAULT, "")
    }
}
