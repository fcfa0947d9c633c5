use std::env;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// Settings read once at startup; nothing here changes while the server runs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub host: String,
    pub port: u16,
    pub template_dir: String,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty or whitespace-only values count as unset
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = non_blank("OPENAI_API_KEY");

        let api_base = non_blank("OPENAI_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model = non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let host = non_blank("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match non_blank("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw })?,
            None => 8080,
        };

        let template_dir = non_blank("TEMPLATE_DIR").unwrap_or_else(|| "templates".to_string());
        let static_dir = non_blank("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        Ok(Self {
            api_key,
            api_base,
            model,
            host,
            port,
            template_dir,
            static_dir,
        })
    }

    pub fn credential_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn template_glob(&self) -> String {
        format!("{}/**/*", self.template_dir.trim_end_matches('/'))
    }
}
