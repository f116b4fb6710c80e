//! HTTP client for the workflow generation API.
//!
//! One `generate` call is one blocking-mode workflow run: a single POST that
//! resolves to the run's outputs or an error. No retries.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use zhizhu3d_core::constants::{DEFAULT_API_KEY_ENV, DEFAULT_REQUEST_TIMEOUT_MS};
use zhizhu3d_core::{GenerationError, GenerationRequest, GenerationResult, GenerationService};

use crate::response::parse_response;

/// Longest error body echoed back in [`GenerationError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

/// Connection parameters for [`HttpGenerationClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Workflow run URL
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
    /// End-user identifier forwarded with each run
    pub user: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user", &self.user)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            user: "zhizhu3d".to_string(),
        }
    }

    /// Builds a config reading the API key from `api_key_env`
    /// (`ZHIZHU3D_API_KEY` when empty).
    pub fn from_env(
        endpoint: impl Into<String>,
        api_key_env: &str,
    ) -> Result<Self, GenerationError> {
        let variable = if api_key_env.is_empty() {
            DEFAULT_API_KEY_ENV
        } else {
            api_key_env
        };
        match std::env::var(variable) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(endpoint, key.trim())),
            _ => Err(GenerationError::MissingApiKey {
                variable: variable.to_string(),
            }),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }
}

/// [`GenerationService`] backed by the workflow HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    config: ClientConfig,
    url: reqwest::Url,
    http: reqwest::Client,
}

impl HttpGenerationClient {
    /// Validates the endpoint and builds the HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self, GenerationError> {
        let invalid = || GenerationError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
        };
        let url = reqwest::Url::parse(&config.endpoint).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if config.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey {
                variable: DEFAULT_API_KEY_ENV.to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self { config, url, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request body for one workflow run.
    pub fn request_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "inputs": request,
            "response_mode": "blocking",
            "user": self.config.user,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            GenerationError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

/// Best message from an error body: `message`, `error` or the raw text.
fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["message", "error"]
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
    });
    let mut message = from_json.unwrap_or_else(|| body.trim().to_string());
    if message.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}

#[async_trait]
impl GenerationService for HttpGenerationClient {
    fn name(&self) -> &str {
        self.url.host_str().unwrap_or("workflow")
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        info!("POST {}", self.url);
        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;
        debug!("Service answered {} with {} bytes", status, text.len());

        if !status.is_success() {
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| GenerationError::InvalidResponse {
                reason: e.to_string(),
            })?;
        Ok(parse_response(&body))
    }
}
