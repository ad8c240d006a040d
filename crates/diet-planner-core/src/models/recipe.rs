// ABOUTME: Recipe planning and recommendation contracts
// ABOUTME: Validates plan inputs and enforces contiguous step numbering on model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{CompositeRequest, ModelContract};
use crate::errors::{AppError, AppResult};

/// A short recipe idea to expand into a full plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePlanRequest {
    /// Recipe idea title, e.g. "Spinach and Chicken Stir Fry"
    pub base_recipe: String,
}

impl RecipePlanRequest {
    /// Create a plan request for one recipe idea
    #[must_use]
    pub fn new(base_recipe: impl Into<String>) -> Self {
        Self {
            base_recipe: base_recipe.into(),
        }
    }

    /// Reject requests that carry no recipe idea
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `base_recipe` is blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_recipe.trim().is_empty() {
            return Err(AppError::invalid_input("base_recipe must not be empty"));
        }
        Ok(())
    }
}

/// One ordered instruction in a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    /// 1-based position of the step
    pub step_number: u32,
    /// What to do in this step
    pub instruction: String,
}

/// A concrete recipe produced by the planner stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePlanResult {
    /// Recipe title
    pub title: String,
    /// Ingredient lines, quantities included when the model gives them
    pub ingredients: Vec<String>,
    /// Steps numbered 1..=n in order
    pub steps: Vec<RecipeStep>,
}

impl ModelContract for RecipePlanResult {
    const CONTRACT: &'static str = "RecipePlanResult";
}

impl RecipePlanResult {
    /// Check the semantic invariants of a recipe plan
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if the title is blank or the step numbers
    /// are not exactly `1..=n` in order.
    pub fn conform(self) -> AppResult<Self> {
        if self.title.trim().is_empty() {
            return Err(AppError::contract_violation(
                Self::CONTRACT,
                "title must not be empty",
            ));
        }

        for (expected, step) in (1_u32..).zip(&self.steps) {
            if step.step_number != expected {
                return Err(AppError::contract_violation(
                    Self::CONTRACT,
                    format!(
                        "steps must be numbered 1..={} in order, found {} at position {expected}",
                        self.steps.len(),
                        step.step_number
                    ),
                ));
            }
        }

        Ok(self)
    }
}

/// Ingredients, a diet and the number of full recipes wanted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Raw ingredient strings
    pub items: Vec<String>,
    /// Free-text diet
    pub diet: String,
    /// Upper bound on the number of recipes returned
    pub recipe_count: u32,
}

impl RecommendRequest {
    /// Reject counts above the configured ceiling
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `recipe_count` exceeds `max_recipes`.
    pub fn validate(&self, max_recipes: u32) -> AppResult<()> {
        if self.recipe_count > max_recipes {
            return Err(AppError::invalid_input(format!(
                "recipe_count must be at most {max_recipes}, got {}",
                self.recipe_count
            )));
        }
        Ok(())
    }

    /// The composite request that produces the recipe ideas
    #[must_use]
    pub fn composite_request(&self) -> CompositeRequest {
        CompositeRequest {
            items: self.items.clone(),
            diet: self.diet.clone(),
        }
    }
}

/// Full recipe plans in suggestion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResult {
    /// At most `recipe_count` plans
    pub recipes: Vec<RecipePlanResult>,
}
