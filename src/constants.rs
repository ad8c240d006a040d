// ABOUTME: Application constants for environment variable names, defaults and service identity
// ABOUTME: Single source for every configuration key the planner reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Environment variable names and their defaults. Planner limits shared with
//! request validation live in [`diet_planner_core::constants`].

pub use diet_planner_core::constants::limits;

/// Service identity used in logs and health payloads
pub mod service_names {
    /// Service name
    pub const AI_DIET_PLANNER: &str = "ai-diet-planner";
}

/// Environment variable names
pub mod env_vars {
    /// Bearer token for the model endpoint
    pub const LLM_API_KEY: &str = "LLM_API_KEY";
    /// Chat-completions endpoint or API base URL
    pub const LLM_API_URL: &str = "LLM_API_URL";
    /// Model identifier sent with every request
    pub const LLM_MODEL: &str = "LLM_MODEL";
    /// Optional whole-request timeout in seconds
    pub const LLM_REQUEST_TIMEOUT_SECS: &str = "LLM_REQUEST_TIMEOUT_SECS";
    /// Bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Ceiling on `recipe_count`
    pub const RECOMMEND_MAX_RECIPES: &str = "RECOMMEND_MAX_RECIPES";
    /// Plan calls in flight during a recommendation
    pub const RECOMMEND_CONCURRENCY: &str = "RECOMMEND_CONCURRENCY";
    /// Comma-separated allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Default model endpoint
    pub const LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
    /// Default model
    pub const LLM_MODEL: &str = "gpt-4o-mini";
    /// Default bind host
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8000;
    /// Connection timeout for the model endpoint
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 30;
}

/// Path suffix of the chat-completions operation
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
