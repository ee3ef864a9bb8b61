use std::fmt;

use crate::error::{Result, WordGenError};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the text-generation provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f64>,
    /// Request timeout; `None` leaves the HTTP stack default.
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. A missing or blank API key is a configuration error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WordGenError::Config("GEMINI_API_KEY not set".into()))?;

        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());

        let api_base_url =
            lookup("GEMINI_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let temperature = lookup("GEMINI_TEMPERATURE").and_then(|v| v.parse().ok());

        let timeout_secs = lookup("GEMINI_TIMEOUT_SECS").and_then(|v| v.parse().ok());

        Ok(Self {
            api_key,
            model,
            api_base_url,
            temperature,
            timeout_secs,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(api_key: impl Into<String>) -> ProviderConfigBuilder {
        ProviderConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            temperature: None,
            timeout_secs: None,
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Builder for constructing `ProviderConfig` in tests.
pub struct ProviderConfigBuilder {
    api_key: String,
    model: String,
    api_base_url: String,
    temperature: Option<f64>,
    timeout_secs: Option<u64>,
}

impl ProviderConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn build(self) -> ProviderConfig {
        ProviderConfig {
            api_key: self.api_key,
            model: self.model,
            api_base_url: self.api_base_url,
            temperature: self.temperature,
            timeout_secs: self.timeout_secs,
        }
    }
}
