// ABOUTME: OpenAI-compatible chat-completions gateway with JSON response mode
// ABOUTME: Classifies upstream status, envelope and content failures into typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Gateway
//!
//! Works with any endpoint that implements the `OpenAI` chat completions API
//! and honours `response_format: {"type": "json_object"}`.
//!
//! ## Configuration
//!
//! - `LLM_API_URL`: full chat-completions URL, or an API base URL to which
//!   `chat/completions` is appended
//! - `LLM_MODEL`: model identifier
//! - `LLM_API_KEY`: bearer token (optional; the header is omitted without it)

use async_trait::async_trait;
use diet_planner_core::errors::{preview, AppError, AppResult, ERROR_PREVIEW_CHARS};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::ModelGateway;
use crate::constants::{defaults, CHAT_COMPLETIONS_PATH};

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Chat completion request body
#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: [OpenAiMessage<'a>; 1],
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Response envelope; only the fields the gateway reads
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// ============================================================================
// Gateway Configuration
// ============================================================================

/// Immutable gateway settings, read once at startup
#[derive(Clone)]
pub struct LlmGatewayConfig {
    /// Bearer token; `None` omits the `Authorization` header
    pub api_key: Option<String>,
    /// Chat-completions URL or API base URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// Whole-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl LlmGatewayConfig {
    /// URL the gateway posts to
    ///
    /// A URL that already names the chat-completions operation is used as is.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let trimmed = self.api_url.trim_end_matches('/');
        if trimmed.ends_with(CHAT_COMPLETIONS_PATH) {
            trimmed.to_owned()
        } else {
            format!("{trimmed}/{CHAT_COMPLETIONS_PATH}")
        }
    }
}

impl Default for LlmGatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: defaults::LLM_API_URL.to_owned(),
            model: defaults::LLM_MODEL.to_owned(),
            request_timeout: None,
        }
    }
}

impl fmt::Debug for LlmGatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmGatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

// ============================================================================
// Gateway Implementation
// ============================================================================

/// Model gateway for `OpenAI`-compatible chat completion endpoints
pub struct OpenAiCompatibleGateway {
    client: Client,
    config: LlmGatewayConfig,
    endpoint: String,
}

impl OpenAiCompatibleGateway {
    /// Create a gateway with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: LlmGatewayConfig) -> AppResult<Self> {
        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(defaults::LLM_CONNECT_TIMEOUT_SECS));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        let endpoint = config.endpoint();
        debug!(endpoint = %endpoint, model = %config.model, "Model gateway configured");

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    /// Pull `choices[0].message.content` out of a successful response body
    fn extract_content(body: &str) -> AppResult<String> {
        let response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            error!(
                "Failed to parse API response: {} - body: {}",
                e,
                preview(body, ERROR_PREVIEW_CHARS)
            );
            AppError::malformed_envelope(format!("Unexpected LLM response format: {e}"))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::malformed_envelope("LLM response contained no choices"))?
            .message
            .content
            .ok_or_else(|| AppError::malformed_envelope("LLM response choice has no message content"))
    }

    /// Parse model content into a JSON object
    fn parse_content(content: &str) -> AppResult<Value> {
        let document: Value = serde_json::from_str(content).map_err(|e| {
            error!("LLM content is not valid JSON: {}", e);
            AppError::invalid_json(content, &e)
        })?;

        if document.is_object() {
            Ok(document)
        } else {
            Err(AppError::contract_violation(
                "model output",
                format!(
                    "expected a JSON object, got: {}",
                    preview(content, ERROR_PREVIEW_CHARS)
                ),
            ))
        }
    }
}

#[async_trait]
impl ModelGateway for OpenAiCompatibleGateway {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn invoke(&self, prompt: &str) -> AppResult<Value> {
        let request = OpenAiRequest {
            model: &self.config.model,
            messages: [OpenAiMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        debug!("Sending chat completion request to {}", self.endpoint);

        let http_request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.endpoint, e);
                AppError::upstream_unavailable(format!("Cannot reach LLM endpoint: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::upstream_unavailable(format!("Failed to read LLM response: {e}"))
                .with_source(e)
        })?;

        if status.as_u16() >= 400 {
            error!(
                upstream.status = status.as_u16(),
                "LLM request failed: {}",
                preview(&body, ERROR_PREVIEW_CHARS)
            );
            return Err(AppError::upstream_request_failed(status.as_u16(), body));
        }

        let content = Self::extract_content(&body)?;
        debug!("Received LLM content: content_len={}", content.len());

        Self::parse_content(&content)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_planner_core::errors::ErrorCode;

    fn config_with_url(api_url: &str) -> LlmGatewayConfig {
        LlmGatewayConfig {
            api_url: api_url.to_owned(),
            ..LlmGatewayConfig::default()
        }
    }

    #[test]
    fn test_endpoint_keeps_full_chat_completions_url() {
        let config = config_with_url("https://api.openai.com/v1/chat/completions");
        assert_eq!(
            config.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_appends_path_to_base_url() {
        assert_eq!(
            config_with_url("http://localhost:11434/v1/").endpoint(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = LlmGatewayConfig {
            api_key: Some("sk-secret".to_owned()),
            ..LlmGatewayConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = OpenAiRequest {
            model: "gpt-4o-mini",
            messages: [OpenAiMessage {
                role: "user",
                content: "hello",
            }],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hello"}],
                "response_format": {"type": "json_object"}
            })
        );
    }

    #[test]
    fn test_extract_content_classifies_envelope_failures() {
        for body in [
            "not json",
            "{}",
            r#"{"choices": []}"#,
            r#"{"choices": [{"message": {}}]}"#,
            r#"{"choices": [{"message": {"content": null}}]}"#,
            r#"{"choices": [{"message": {"content": 42}}]}"#,
        ] {
            let err = OpenAiCompatibleGateway::extract_content(body).unwrap_err();
            assert_eq!(err.code, ErrorCode::UpstreamMalformedEnvelope, "body: {body}");
        }
    }

    #[test]
    fn test_parse_content_distinguishes_invalid_json_and_non_object() {
        let err = OpenAiCompatibleGateway::parse_content("Sure! Here you go").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);

        let err = OpenAiCompatibleGateway::parse_content(r#"["tomato"]"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ContractViolation);

        let document = OpenAiCompatibleGateway::parse_content(r#"{"a": 1}"#).unwrap();
        assert_eq!(document["a"], 1);
    }
}
