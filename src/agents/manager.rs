// ABOUTME: Manager agent composing inventory cleanup and diet filtering
// ABOUTME: Diet filtering only ever sees inventory-approved items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner_core::errors::AppResult;
use diet_planner_core::models::{CompositeRequest, CompositeResult};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{DietAgent, InventoryAgent};
use crate::llm::ModelGateway;

/// Runs the inventory stage, then the diet stage on its output
#[derive(Clone)]
pub struct ManagerAgent {
    inventory: InventoryAgent,
    diet: DietAgent,
}

impl ManagerAgent {
    /// Compose existing stage agents
    #[must_use]
    pub const fn new(inventory: InventoryAgent, diet: DietAgent) -> Self {
        Self { inventory, diet }
    }

    /// Build both stage agents on one gateway
    #[must_use]
    pub fn with_gateway(gateway: &Arc<dyn ModelGateway>) -> Self {
        Self::new(
            InventoryAgent::new(Arc::clone(gateway)),
            DietAgent::new(Arc::clone(gateway)),
        )
    }

    /// Clean the pantry, filter it by diet and collect recipe ideas
    ///
    /// # Errors
    ///
    /// Any stage failure is returned as is; nothing partial is produced.
    #[instrument(skip_all, fields(agent = "manager"))]
    pub async fn run(&self, request: &CompositeRequest) -> AppResult<CompositeResult> {
        let inventory = self.inventory.run(&request.inventory_request()).await?;
        debug!(
            "inventory stage kept {} of {} items",
            inventory.usable_items.len(),
            request.items.len()
        );

        let diet_request = request.diet_request(inventory.usable_items);
        let diet = self.diet.run(&diet_request).await?;

        Ok(CompositeResult {
            usable_items: diet_request.items,
            diet_filtered: diet.compatible_items,
            suggestions: diet.recipe_ideas,
        })
    }
}
