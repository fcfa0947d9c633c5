use thiserror::Error;

/// Startup configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of a single call to the completion endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API credential is not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("malformed response from completion endpoint: {0}")]
    Malformed(String),

    #[error("completion endpoint returned no content")]
    EmptyResponse,
}

/// Outcome of a form submission that did not produce an answer.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("OPENAI_API_KEY が設定されていません。.env を確認してください。")]
    Configuration,

    #[error("入力テキストを入力してください。")]
    Validation,

    #[error("エラーが発生しました: {0}")]
    Gateway(#[from] GatewayError),
}

impl SubmitError {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Configuration => "configuration",
            SubmitError::Validation => "validation",
            SubmitError::Gateway(_) => "gateway",
        }
    }
}
