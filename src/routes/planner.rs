// ABOUTME: Planner route handlers for inventory, diet, ask, plan and recommend operations
// ABOUTME: Thin handlers that decode the request, delegate to an agent and render the contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner routes
//!
//! Each handler maps one JSON request contract to one agent call. Errors are
//! rendered through `AppError`'s `IntoResponse` implementation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use diet_planner_core::errors::AppError;
use diet_planner_core::models::{
    CompositeRequest, DietRequest, InventoryRequest, RecipePlanRequest, RecommendRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::resources::ServerResources;

/// Planner routes implementation
pub struct PlannerRoutes;

impl PlannerRoutes {
    /// Create all planner routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/inventory", post(Self::handle_inventory))
            .route("/diet", post(Self::handle_diet))
            .route("/ask", post(Self::handle_ask))
            .route("/plan", post(Self::handle_plan))
            .route("/recommend", post(Self::handle_recommend))
            .with_state(resources)
    }

    async fn handle_inventory(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<InventoryRequest>,
    ) -> Result<Response, AppError> {
        let result = resources.inventory_agent.run(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    async fn handle_diet(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<DietRequest>,
    ) -> Result<Response, AppError> {
        let result = resources.diet_agent.run(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    async fn handle_ask(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CompositeRequest>,
    ) -> Result<Response, AppError> {
        info!(
            "Received /ask request: items={:?}, diet={}",
            request.items, request.diet
        );

        let result = resources.manager_agent.run(&request).await?;

        info!("/ask response: suggestions={:?}", result.suggestions);
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    async fn handle_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecipePlanRequest>,
    ) -> Result<Response, AppError> {
        info!("Received /plan request: base_recipe={}", request.base_recipe);

        let result = resources.planner_agent.plan(&request).await?;

        info!("/plan response: title={}", result.title);
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecommendRequest>,
    ) -> Result<Response, AppError> {
        info!(
            "Received /recommend request: items={:?}, diet={}, recipe_count={}",
            request.items, request.diet, request.recipe_count
        );

        let result = resources.planner_agent.recommend(&request).await?;

        info!("/recommend response: recipe_count={}", result.recipes.len());
        Ok((StatusCode::OK, Json(result)).into_response())
    }
}
