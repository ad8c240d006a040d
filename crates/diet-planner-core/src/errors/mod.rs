// ABOUTME: Unified error taxonomy for gateway, contract, and request validation failures
// ABOUTME: Maps every failure kind to a stable wire code and an HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the planner pipeline is an [`AppError`] tagged with an
//! [`ErrorCode`]. Lower layers never substitute fallback values: an error raised
//! by the model gateway or by a contract check travels unchanged to the HTTP
//! boundary, which renders it through [`ErrorResponse`].

#[cfg(feature = "http-response")]
mod http_response;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Maximum number of characters of upstream text echoed into error messages
pub const ERROR_PREVIEW_CHARS: usize = 200;

/// Standard error codes used throughout the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Upstream model endpoint
    /// The model endpoint answered with a status >= 400
    #[serde(rename = "REQUEST_FAILED")]
    UpstreamRequestFailed,
    /// The response envelope did not carry `choices[0].message.content`
    #[serde(rename = "BAD_RESPONSE")]
    UpstreamMalformedEnvelope,
    /// The model endpoint could not be reached at the transport level
    #[serde(rename = "UPSTREAM_UNAVAILABLE")]
    UpstreamUnavailable,

    // Model output
    /// The model content was not parseable JSON
    #[serde(rename = "INVALID_JSON")]
    InvalidJson,
    /// The model content parsed but does not satisfy the stage contract
    #[serde(rename = "CONTRACT_VIOLATION")]
    ContractViolation,

    // Client input
    /// The client request failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    // Configuration
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,

    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Default HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::UpstreamRequestFailed
            | Self::UpstreamMalformedEnvelope
            | Self::UpstreamUnavailable
            | Self::InvalidJson
            | Self::ContractViolation => 502,
            Self::ConfigMissing | Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Stable wire name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpstreamRequestFailed => "REQUEST_FAILED",
            Self::UpstreamMalformedEnvelope => "BAD_RESPONSE",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::InvalidJson => "INVALID_JSON",
            Self::ContractViolation => "CONTRACT_VIOLATION",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UpstreamRequestFailed => "LLM request failed",
            Self::UpstreamMalformedEnvelope => "LLM returned an unexpected response format",
            Self::UpstreamUnavailable => "LLM endpoint is unreachable",
            Self::InvalidJson => "LLM content is not valid JSON",
            Self::ContractViolation => "LLM output does not match the expected contract",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the planner
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Status returned by the model endpoint, when it answered with an error
    pub upstream_status: Option<u16>,
    /// Structured diagnostics rendered into the error response
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    ///
    /// Upstream request failures keep the upstream status so callers see what
    /// the model endpoint actually answered.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match (self.code, self.upstream_status) {
            (ErrorCode::UpstreamRequestFailed, Some(status)) if (400..=599).contains(&status) => {
                status
            }
            (code, _) => code.http_status(),
        }
    }
}

/// Convenience constructors for the planner's failure kinds
impl AppError {
    /// The model endpoint answered with an error status
    #[must_use]
    pub fn upstream_request_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut error = Self::new(
            ErrorCode::UpstreamRequestFailed,
            format!(
                "LLM request failed with status {status}: {}",
                preview(&body, ERROR_PREVIEW_CHARS)
            ),
        )
        .with_details(serde_json::json!({
            "upstream_status": status,
            "body": body,
        }));
        error.upstream_status = Some(status);
        error
    }

    /// The response envelope lacked the expected content field
    #[must_use]
    pub fn malformed_envelope(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamMalformedEnvelope, message)
    }

    /// The model endpoint could not be reached
    #[must_use]
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// The model content was not valid JSON
    #[must_use]
    pub fn invalid_json(content: &str, parse_error: &serde_json::Error) -> Self {
        Self::new(
            ErrorCode::InvalidJson,
            format!(
                "LLM content is not valid JSON ({parse_error}): {}",
                preview(content, ERROR_PREVIEW_CHARS)
            ),
        )
    }

    /// The model output does not satisfy `contract`
    #[must_use]
    pub fn contract_violation(contract: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ContractViolation,
            format!("{contract}: {}", message.into()),
        )
        .with_details(serde_json::json!({ "contract": contract }))
    }

    /// Invalid client input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing configuration
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Unparseable configuration
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured diagnostics
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
