// ABOUTME: Shared test utilities for agent and route integration tests
// ABOUTME: Provides a scripted ModelGateway fake that records prompts, and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ai_diet_planner`

use ai_diet_planner::{
    config::{RecommendConfig, ServerConfig},
    errors::{AppError, AppResult},
    llm::ModelGateway,
    resources::ServerResources,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

type Responder = dyn Fn(&str) -> AppResult<Value> + Send + Sync;
type Delay = dyn Fn(&str) -> Duration + Send + Sync;

/// Gateway fake answering from a script or a prompt-driven responder
pub struct ScriptedGateway {
    script: Mutex<VecDeque<AppResult<Value>>>,
    responder: Option<Box<Responder>>,
    delay: Option<Box<Delay>>,
    prompts: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedGateway {
    /// Answer calls with `script` in order; extra calls fail with an internal error
    pub fn new(script: Vec<AppResult<Value>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            responder: None,
            delay: None,
            prompts: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Answer every call by applying `responder` to the prompt
    pub fn responding(responder: impl Fn(&str) -> AppResult<Value> + Send + Sync + 'static) -> Self {
        Self {
            responder: Some(Box::new(responder)),
            ..Self::new(Vec::new())
        }
    }

    /// Sleep for `delay(prompt)` before answering
    pub fn with_delay(mut self, delay: impl Fn(&str) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls received
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Highest number of calls that were running at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn next_reply(&self, prompt: &str) -> AppResult<Value> {
        if let Some(responder) = &self.responder {
            return responder(prompt);
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("scripted gateway exhausted")))
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn invoke(&self, prompt: &str) -> AppResult<Value> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(prompt)).await;
        }
        let reply = self.next_reply(prompt);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }

    fn model(&self) -> &str {
        "scripted-test-model"
    }
}

/// Server resources wired to `gateway` with default configuration
pub fn resources_with(gateway: Arc<ScriptedGateway>) -> Arc<ServerResources> {
    resources_with_recommend(gateway, RecommendConfig::default())
}

/// Server resources wired to `gateway` with custom recommendation limits
pub fn resources_with_recommend(
    gateway: Arc<ScriptedGateway>,
    recommend: RecommendConfig,
) -> Arc<ServerResources> {
    init_test_logging();
    let config = ServerConfig {
        recommend,
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(config, gateway))
}

// ============================================================================
// Canned model documents
// ============================================================================

pub fn inventory_document(usable_items: &[&str]) -> Value {
    json!({
        "usable_items": usable_items,
        "message": "Removed blank and invalid entries."
    })
}

pub fn diet_document(compatible_items: &[&str], ideas: &[&str]) -> Value {
    json!({
        "compatible_items": compatible_items,
        "suggested_recipe_ideas": ideas
    })
}

pub fn plan_document(title: &str) -> Value {
    json!({
        "title": title,
        "ingredients": ["2 cups mixed greens", "1 tbsp olive oil"],
        "steps": [
            {"step_number": 1, "instruction": "Wash the greens."},
            {"step_number": 2, "instruction": "Dress and serve."}
        ]
    })
}

/// Base recipe named in a plan prompt
pub fn base_recipe_of(prompt: &str) -> Option<String> {
    let start = prompt.find("base recipe idea: ")? + "base recipe idea: ".len();
    let rest = &prompt[start..];
    let end = rest.find(".\n")?;
    Some(rest[..end].to_owned())
}
