// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the in-process router client and the mock chat-completions upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;
pub mod mock_upstream;
