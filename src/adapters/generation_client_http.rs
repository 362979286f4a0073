//! Messages API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GenerationApiConfig};
use crate::ports::{GenerationClient, GenerationRequest, GenerationResponse};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

const X_API_KEY: &str = "x-api-key";
const ANTHROPIC_VERSION_HEADER: &str = "anthropic-version";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_STATUS_MESSAGE: &str = "Generation API request failed";

/// HTTP transport for the Messages API.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by [`RetryingGenerationClient`](super::RetryingGenerationClient).
#[derive(Clone)]
pub struct HttpGenerationClient {
    api_key: String,
    api_url: Url,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl std::fmt::Debug for HttpGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerationClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerationClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::generation(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn send_request(&self, request: &ApiRequest) -> Result<GenerationResponse, AppError> {
        tracing::debug!(url = %self.api_url, model = %request.model, "sending generation request");

        let response = self
            .client
            .post(self.api_url.clone())
            .header(X_API_KEY, &self.api_key)
            .header(ANTHROPIC_VERSION_HEADER, ANTHROPIC_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    AppError::GenerationUnavailable(e.to_string())
                } else {
                    AppError::generation(format!("HTTP request failed: {}", e), None)
                }
            })?;

        let status = response.status();
        let retry_after = response.headers().get(RETRY_AFTER).and_then(parse_retry_after);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| {
                    AppError::generation(
                        format!("Failed to parse response: {}", e),
                        Some(status.as_u16()),
                    )
                })?;

            let text: String = api_response
                .content
                .into_iter()
                .filter(|block| block.block_type == "text")
                .filter_map(|block| block.text)
                .collect();

            return Ok(GenerationResponse {
                text,
                input_tokens: api_response.usage.as_ref().map(|usage| usage.input_tokens),
                output_tokens: api_response.usage.as_ref().map(|usage| usage.output_tokens),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GenerationApi { message, status: Some(status.as_u16()), retry_after })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// `Retry-After` in delta-seconds form; HTTP dates are ignored.
fn parse_retry_after(value: &HeaderValue) -> Option<Duration> {
    value.to_str().ok()?.trim().parse::<u64>().ok().map(Duration::from_secs)
}

impl GenerationClient for HttpGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        let api_request = ApiRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: request.system_text,
            messages: vec![ApiMessage { role: "user", content: request.user_text }],
        };

        self.send_request(&api_request)
    }
}
