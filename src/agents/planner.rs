// ABOUTME: Planner agent expanding recipe ideas into full recipes
// ABOUTME: Drives the bounded, order-preserving recommendation fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Planner
//!
//! [`PlannerAgent::plan`] turns one recipe idea into a concrete recipe.
//! [`PlannerAgent::recommend`] runs the manager to obtain recipe ideas and then
//! plans up to `recipe_count` of them. Plans are issued one at a time unless a
//! wider fan-out is configured; either way results keep suggestion order and
//! the first failing plan aborts the recommendation.

use diet_planner_core::errors::AppResult;
use diet_planner_core::models::{
    ModelContract, RecipePlanRequest, RecipePlanResult, RecommendRequest, RecommendResult,
};
use futures_util::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::ManagerAgent;
use crate::config::RecommendConfig;
use crate::llm::{prompts, ModelGateway};

/// Plans single recipes and recommendation batches
#[derive(Clone)]
pub struct PlannerAgent {
    gateway: Arc<dyn ModelGateway>,
    manager: ManagerAgent,
    settings: RecommendConfig,
}

impl PlannerAgent {
    /// Create a planner using `manager` for recipe ideas
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        manager: ManagerAgent,
        settings: RecommendConfig,
    ) -> Self {
        Self {
            gateway,
            manager,
            settings,
        }
    }

    /// Produce one concrete recipe for `request.base_recipe`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank recipe idea, gateway failures
    /// unchanged, and `ContractViolation` for a mistyped plan, blank title or
    /// non-contiguous step numbering.
    #[instrument(skip_all, fields(agent = "planner", base_recipe = %request.base_recipe))]
    pub async fn plan(&self, request: &RecipePlanRequest) -> AppResult<RecipePlanResult> {
        request.validate()?;
        info!("plan input: base_recipe={}", request.base_recipe);

        let document = self.gateway.invoke(&prompts::plan_prompt(request)?).await?;
        let result = RecipePlanResult::from_document(document)?.conform()?;

        info!(
            "plan output: title={}, ingredients={}, steps={}",
            result.title,
            result.ingredients.len(),
            result.steps.len()
        );
        Ok(result)
    }

    /// Plan up to `recipe_count` recipes from the manager's suggestions
    ///
    /// A count of zero returns immediately without calling the model. Fewer
    /// suggestions than requested yield fewer recipes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `recipe_count` exceeds the configured
    /// maximum, otherwise the first manager or plan failure.
    #[instrument(skip_all, fields(agent = "planner", recipe_count = request.recipe_count))]
    pub async fn recommend(&self, request: &RecommendRequest) -> AppResult<RecommendResult> {
        request.validate(self.settings.max_recipes)?;

        if request.recipe_count == 0 {
            debug!("recipe_count is 0, skipping model calls");
            return Ok(RecommendResult {
                recipes: Vec::new(),
            });
        }

        let composite = self.manager.run(&request.composite_request()).await?;
        let wanted = usize::try_from(request.recipe_count).unwrap_or(usize::MAX);
        let ideas: Vec<RecipePlanRequest> = composite
            .suggestions
            .into_iter()
            .take(wanted)
            .map(RecipePlanRequest::new)
            .collect();

        info!(
            "planning {} of {} requested recipes with concurrency {}",
            ideas.len(),
            request.recipe_count,
            self.settings.concurrency
        );

        let recipes = self.plan_all(ideas).await?;
        Ok(RecommendResult { recipes })
    }

    /// Plan every idea, keeping input order; stops at the first failure
    async fn plan_all(&self, ideas: Vec<RecipePlanRequest>) -> AppResult<Vec<RecipePlanResult>> {
        let plans = stream::iter(ideas);
        if self.settings.concurrency <= 1 {
            plans
                .then(|idea| async move { self.plan(&idea).await })
                .try_collect()
                .await
        } else {
            plans
                .map(|idea| async move { self.plan(&idea).await })
                .buffered(self.settings.concurrency)
                .try_collect()
                .await
        }
    }
}
