// ABOUTME: Inventory agent that asks the model to drop blank or invalid pantry entries
// ABOUTME: Enforces that usable items come from the submitted list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner_core::errors::AppResult;
use diet_planner_core::models::{InventoryRequest, InventoryResult, ModelContract};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::llm::{prompts, ModelGateway};

/// Cleans a raw pantry list through the model
#[derive(Clone)]
pub struct InventoryAgent {
    gateway: Arc<dyn ModelGateway>,
}

impl InventoryAgent {
    /// Create an agent backed by `gateway`
    #[must_use]
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Return the usable subset of `request.items`
    ///
    /// # Errors
    ///
    /// Propagates gateway failures unchanged. Returns `ContractViolation` if
    /// the model output is mistyped, has an empty message or names an
    /// ingredient that was not submitted.
    #[instrument(skip_all, fields(agent = "inventory", items = request.items.len()))]
    pub async fn run(&self, request: &InventoryRequest) -> AppResult<InventoryResult> {
        info!("inventory input: items={:?}", request.items);

        let document = self
            .gateway
            .invoke(&prompts::inventory_prompt(request)?)
            .await?;
        let result = InventoryResult::from_document(document)?.conform(request)?;

        info!(
            "inventory output: usable_items={:?}, message={}",
            result.usable_items, result.message
        );
        Ok(result)
    }
}
