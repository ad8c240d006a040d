// ABOUTME: Shared planner limits used by both request validation and orchestration
// ABOUTME: Defaults for recommendation size and fan-out width
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recommendation limits
pub mod limits {
    /// Largest `recipe_count` accepted by `/recommend` unless overridden
    pub const DEFAULT_MAX_RECIPE_COUNT: u32 = 10;

    /// Number of plan calls in flight at once during a recommendation
    pub const DEFAULT_RECOMMEND_CONCURRENCY: usize = 1;
}
