// ABOUTME: Main library entry point for the AI Diet Planner service
// ABOUTME: Wires configuration, logging, the model gateway, agents and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Diet Planner
//!
//! An HTTP service that filters a pantry through an external text-generation
//! model, matches it against a free-text diet, and expands recipe ideas into
//! complete step-by-step recipes.
//!
//! ## Layers
//!
//! - **Contracts** ([`diet_planner_core::models`]): typed request/result pairs per stage
//! - **Gateway** ([`llm`]): one prompt in, one JSON object out
//! - **Agents** ([`agents`]): inventory, diet, manager and planner
//! - **Routes** ([`routes`]): axum handlers over shared [`resources::ServerResources`]
//!
//! ## Quick Start
//!
//! 1. Set `LLM_API_KEY` (and optionally `LLM_API_URL`, `LLM_MODEL`)
//! 2. Run `cargo run --bin ai-diet-planner`
//! 3. `POST /ask` with `{"items": ["tomato", "spinach"], "diet": "vegan"}`

/// Planner agents
pub mod agents;

/// Configuration management
pub mod config;

/// Environment variable names and defaults
pub mod constants;

/// Model gateway and prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

pub use diet_planner_core::errors;
pub use diet_planner_core::models;
