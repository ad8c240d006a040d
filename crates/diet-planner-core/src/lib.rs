// ABOUTME: Core types shared across the diet planner workspace
// ABOUTME: Error taxonomy, stage contracts and planner limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core types for the AI diet planner.
//!
//! This crate has no I/O. It defines the error taxonomy shared by every layer,
//! the typed contracts each planner stage consumes and produces, and the
//! limits used when validating requests.

/// Error taxonomy and HTTP error rendering
pub mod errors;

/// Stage request and result contracts
pub mod models;

/// Planner limits
pub mod constants;
