// ABOUTME: Route module organization for the AI Diet Planner HTTP endpoints
// ABOUTME: Assembles domain routers with tracing and CORS layers into one application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the AI Diet Planner
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the agents in [`crate::agents`].

/// Root greeting and health check routes
pub mod health;
/// Inventory, diet, ask, plan and recommend routes
pub mod planner;

pub use health::HealthRoutes;
pub use planner::PlannerRoutes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Build the full application router
///
/// Every request produces one access log line with method, URI, version,
/// status and latency.
pub fn app(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PlannerRoutes::routes(resources))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}
