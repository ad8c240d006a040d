// ABOUTME: Environment configuration for the model gateway, HTTP binding and recommendation limits
// ABOUTME: Loads .env files, parses typed values and renders a redacted summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use diet_planner_core::errors::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

use crate::constants::{defaults, env_vars, limits};
use crate::llm::LlmGatewayConfig;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Comma-separated allowed origins, or `*`
    pub cors_allowed_origins: String,
}

/// Recommendation fan-out settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Largest accepted `recipe_count`
    pub max_recipes: u32,
    /// Plan calls in flight at once; 1 is strictly sequential
    pub concurrency: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_recipes: limits::DEFAULT_MAX_RECIPE_COUNT,
            concurrency: limits::DEFAULT_RECOMMEND_CONCURRENCY,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listener
    pub http: HttpConfig,
    /// Model gateway
    pub llm: LlmGatewayConfig,
    /// Recommendation limits
    pub recommend: RecommendConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                host: defaults::HTTP_HOST.to_owned(),
                port: defaults::HTTP_PORT,
                cors_allowed_origins: "*".to_owned(),
            },
            llm: LlmGatewayConfig::default(),
            recommend: RecommendConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for unparseable values and `ConfigMissing` when
    /// a required value is set to an empty string.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let api_key = lookup(env_vars::LLM_API_KEY).filter(|key| !key.trim().is_empty());

        let request_timeout = lookup(env_vars::LLM_REQUEST_TIMEOUT_SECS)
            .map(|raw| parse_value::<u64>(env_vars::LLM_REQUEST_TIMEOUT_SECS, &raw))
            .transpose()?
            .map(Duration::from_secs);

        let config = Self {
            http: HttpConfig {
                host: required_or(&lookup, env_vars::HTTP_HOST, defaults::HTTP_HOST)?,
                port: parsed_or(&lookup, env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
                cors_allowed_origins: lookup(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| "*".to_owned()),
            },
            llm: LlmGatewayConfig {
                api_key,
                api_url: required_or(&lookup, env_vars::LLM_API_URL, defaults::LLM_API_URL)?,
                model: required_or(&lookup, env_vars::LLM_MODEL, defaults::LLM_MODEL)?,
                request_timeout,
            },
            recommend: RecommendConfig {
                max_recipes: parsed_or(
                    &lookup,
                    env_vars::RECOMMEND_MAX_RECIPES,
                    limits::DEFAULT_MAX_RECIPE_COUNT,
                )?,
                concurrency: parsed_or(
                    &lookup,
                    env_vars::RECOMMEND_CONCURRENCY,
                    limits::DEFAULT_RECOMMEND_CONCURRENCY,
                )?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the endpoint URL is not http(s), the timeout
    /// is zero or the fan-out width is zero.
    pub fn validate(&self) -> AppResult<()> {
        let url = reqwest::Url::parse(&self.llm.api_url).map_err(|e| {
            AppError::config_invalid(format!(
                "{} is not a valid URL: {e}",
                env_vars::LLM_API_URL
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(format!(
                "{} must use http or https, got {}",
                env_vars::LLM_API_URL,
                url.scheme()
            )));
        }

        if self.llm.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_vars::LLM_REQUEST_TIMEOUT_SECS
            )));
        }

        if self.recommend.concurrency == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be at least 1",
                env_vars::RECOMMEND_CONCURRENCY
            )));
        }

        if self.llm.api_key.is_none() {
            warn!(
                "{} is not set; requests will be sent without an Authorization header",
                env_vars::LLM_API_KEY
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "AI Diet Planner Configuration:\n\
             - HTTP: {}:{}\n\
             - CORS Origins: {}\n\
             - LLM Endpoint: {}\n\
             - LLM Model: {}\n\
             - LLM API Key: {}\n\
             - LLM Timeout: {}\n\
             - Max Recipes: {}\n\
             - Recommend Concurrency: {}",
            self.http.host,
            self.http.port,
            self.http.cors_allowed_origins,
            self.llm.endpoint(),
            self.llm.model,
            if self.llm.api_key.is_some() {
                "Configured"
            } else {
                "Not set"
            },
            self.llm
                .request_timeout
                .map_or_else(|| "transport default".to_owned(), |t| format!("{}s", t.as_secs())),
            self.recommend.max_recipes,
            self.recommend.concurrency,
        )
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

/// Variable value, or `default` when unset; set-but-blank is an error
fn required_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> AppResult<String> {
    match lookup(key) {
        None => Ok(default.to_owned()),
        Some(value) if value.trim().is_empty() => Err(AppError::config_missing(format!(
            "{key} is set but empty"
        ))),
        Some(value) => Ok(value.trim().to_owned()),
    }
}

/// Parsed variable value, or `default` when unset
fn parsed_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
}
