// ABOUTME: Diet agent that keeps diet-compatible ingredients and proposes recipe titles
// ABOUTME: Forwards the free-text diet verbatim and validates the model's subset claim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner_core::errors::AppResult;
use diet_planner_core::models::{DietRequest, DietResult, ModelContract};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::llm::{prompts, ModelGateway};

/// Filters ingredients by diet and suggests recipe ideas
#[derive(Clone)]
pub struct DietAgent {
    gateway: Arc<dyn ModelGateway>,
}

impl DietAgent {
    /// Create an agent backed by `gateway`
    #[must_use]
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Return the diet-compatible items and recipe idea titles
    ///
    /// # Errors
    ///
    /// Propagates gateway failures unchanged. Returns `ContractViolation` if
    /// the output is mistyped, names an item outside the request or contains
    /// a blank title.
    #[instrument(skip_all, fields(agent = "diet", diet = %request.diet))]
    pub async fn run(&self, request: &DietRequest) -> AppResult<DietResult> {
        info!("diet input: items={:?}, diet={}", request.items, request.diet);

        let document = self.gateway.invoke(&prompts::diet_prompt(request)?).await?;
        let result = DietResult::from_document(document)?.conform(request)?;

        info!(
            "diet output: compatible_items={:?}, recipe_ideas={:?}",
            result.compatible_items, result.recipe_ideas
        );
        Ok(result)
    }
}
