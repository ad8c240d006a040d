// ABOUTME: Model gateway abstraction turning one prompt into one parsed JSON document
// ABOUTME: Defines the ModelGateway trait implemented by the OpenAI-compatible client and test fakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Gateway
//!
//! Every agent talks to the external model through [`ModelGateway`]. A gateway
//! call either yields a parsed JSON object or fails with one of the upstream
//! error kinds. Gateways never retry and never substitute fallback content.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ai_diet_planner::llm::{LlmGatewayConfig, ModelGateway, OpenAiCompatibleGateway};
//! use diet_planner_core::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let gateway = OpenAiCompatibleGateway::new(LlmGatewayConfig::default())?;
//!     let document = gateway
//!         .invoke("Return a JSON object with a greeting field. Respond ONLY with valid JSON.")
//!         .await?;
//!     println!("{document}");
//!     Ok(())
//! }
//! ```

mod openai_compatible;
pub mod prompts;

pub use openai_compatible::{LlmGatewayConfig, OpenAiCompatibleGateway};

use async_trait::async_trait;
use diet_planner_core::errors::AppResult;
use serde_json::Value;

/// Text-generation backend used by the planner agents
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send `prompt` as a single user message and return the parsed JSON object
    ///
    /// # Errors
    ///
    /// - `UpstreamRequestFailed` when the endpoint answers with status >= 400
    /// - `UpstreamMalformedEnvelope` when the reply lacks `choices[0].message.content`
    /// - `UpstreamUnavailable` when the endpoint cannot be reached
    /// - `InvalidJson` when the content is not JSON
    /// - `ContractViolation` when the content is JSON but not an object
    async fn invoke(&self, prompt: &str) -> AppResult<Value>;

    /// Model identifier sent with each request
    fn model(&self) -> &str;
}
