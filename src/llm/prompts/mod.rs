// ABOUTME: Prompt templates for the inventory, diet and recipe planning stages
// ABOUTME: Templates are loaded at compile time and rendered with minijinja
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stage Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance
//! and registered once in a shared [`minijinja::Environment`]. Values are
//! substituted as plain text; request text containing template syntax is never
//! evaluated.

use diet_planner_core::errors::{AppError, AppResult};
use diet_planner_core::models::{DietRequest, InventoryRequest, RecipePlanRequest};
use minijinja::{context, Environment};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::error;

/// Inventory cleanup instructions
pub const INVENTORY_PROMPT: &str = include_str!("inventory.md");

/// Diet filtering and recipe idea instructions
pub const DIET_PROMPT: &str = include_str!("diet.md");

/// Concrete recipe planning instructions
pub const PLAN_PROMPT: &str = include_str!("plan.md");

const INVENTORY_TEMPLATE: &str = "inventory.md";
const DIET_TEMPLATE: &str = "diet.md";
const PLAN_TEMPLATE: &str = "plan.md";

static ENGINE: LazyLock<Result<PromptEngine, minijinja::Error>> =
    LazyLock::new(PromptEngine::new);

/// Template environment holding every stage prompt
struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    // `.md` names keep minijinja auto-escaping off
    fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INVENTORY_TEMPLATE, INVENTORY_PROMPT)?;
        env.add_template(DIET_TEMPLATE, DIET_PROMPT)?;
        env.add_template(PLAN_TEMPLATE, PLAN_PROMPT)?;
        Ok(Self { env })
    }

    fn shared() -> AppResult<&'static Self> {
        ENGINE.as_ref().map_err(|e| {
            error!("Prompt templates failed to load: {e}");
            AppError::internal(format!("prompt templates failed to load: {e}"))
        })
    }

    fn render<S: serde::Serialize>(&self, name: &str, ctx: S) -> AppResult<String> {
        let rendered = self
            .env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| AppError::internal(format!("failed to render {name}: {e}")))?;
        Ok(rendered.trim_end().to_owned())
    }
}

/// Render the inventory prompt with the request items as a JSON array
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the template cannot be rendered.
pub fn inventory_prompt(request: &InventoryRequest) -> AppResult<String> {
    PromptEngine::shared()?.render(
        INVENTORY_TEMPLATE,
        context! { items => json_array(&request.items) },
    )
}

/// Render the diet prompt; the diet text is inserted verbatim
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the template cannot be rendered.
pub fn diet_prompt(request: &DietRequest) -> AppResult<String> {
    PromptEngine::shared()?.render(
        DIET_TEMPLATE,
        context! {
            items => json_array(&request.items),
            diet => request.diet.as_str(),
        },
    )
}

/// Render the recipe plan prompt
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the template cannot be rendered.
pub fn plan_prompt(request: &RecipePlanRequest) -> AppResult<String> {
    PromptEngine::shared()?.render(
        PLAN_TEMPLATE,
        context! { base_recipe => request.base_recipe.as_str() },
    )
}

fn json_array(items: &[String]) -> String {
    Value::from(items.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prompt_demands_json() {
        for template in [INVENTORY_PROMPT, DIET_PROMPT, PLAN_PROMPT] {
            assert!(template.trim_end().ends_with("Respond ONLY with valid JSON."));
        }
    }

    #[test]
    fn test_inventory_prompt_embeds_items_as_json() {
        let prompt = inventory_prompt(&InventoryRequest::new(vec![
            "tomato".to_owned(),
            String::new(),
        ]))
        .unwrap();
        assert!(prompt.contains(r#"["tomato",""]"#));
        assert!(prompt.contains("usable_items"));
        assert!(!prompt.contains("{{"));
        assert!(prompt.ends_with("Respond ONLY with valid JSON."));
    }

    #[test]
    fn test_diet_prompt_forwards_diet_verbatim() {
        let prompt = diet_prompt(&DietRequest {
            items: vec!["spinach".to_owned()],
            diet: "low-FODMAP, no nuts & <dairy>".to_owned(),
        })
        .unwrap();
        assert!(prompt.contains("fit this diet: low-FODMAP, no nuts & <dairy>."));
        assert!(prompt.contains("for the low-FODMAP, no nuts & <dairy> diet"));
        assert!(prompt.contains(r#"["spinach"]"#));
        assert!(prompt.contains("suggested_recipe_ideas"));
    }

    #[test]
    fn test_plan_prompt_names_base_recipe_and_step_shape() {
        let prompt = plan_prompt(&RecipePlanRequest::new("Vegan Salad")).unwrap();
        assert!(prompt.contains("Here is a base recipe idea: Vegan Salad."));
        assert!(prompt.contains("step_number"));
        assert!(prompt.contains("instruction"));
    }

    #[test]
    fn test_template_syntax_in_request_text_is_not_evaluated() {
        let prompt =
            plan_prompt(&RecipePlanRequest::new("{{ base_recipe }} {% if x %}")).unwrap();
        assert!(prompt.contains("Here is a base recipe idea: {{ base_recipe }} {% if x %}."));

        let prompt = diet_prompt(&DietRequest {
            items: vec!["{{ diet }}".to_owned()],
            diet: "vegan".to_owned(),
        })
        .unwrap();
        assert!(prompt.contains(r#"["{{ diet }}"]"#));
    }
}
