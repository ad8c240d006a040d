// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven service configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the AI Diet Planner
//!
//! All configuration is read once at startup and shared immutably afterwards.

/// Environment and server configuration
pub mod environment;

pub use environment::{HttpConfig, RecommendConfig, ServerConfig};
