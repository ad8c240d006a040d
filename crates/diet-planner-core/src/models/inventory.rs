// ABOUTME: Inventory stage contracts for pantry cleanup
// ABOUTME: Defines InventoryRequest and the model-produced InventoryResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{canonical_subset, ModelContract};
use crate::errors::{AppError, AppResult};

/// Raw pantry contents as submitted by the caller
///
/// Entries may be blank or nonsensical; removing them is the inventory stage's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRequest {
    /// Ingredient strings in submission order
    pub items: Vec<String>,
}

impl InventoryRequest {
    /// Create a request from any list of ingredient strings
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Input entries that are not blank
    #[must_use]
    pub fn non_blank_items(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Usable ingredients as judged by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryResult {
    /// Ingredients suitable for cooking, drawn from the request
    pub usable_items: Vec<String>,
    /// Short confirmation from the model
    pub message: String,
}

impl ModelContract for InventoryResult {
    const CONTRACT: &'static str = "InventoryResult";
}

impl InventoryResult {
    /// Check this result against the request that produced it
    ///
    /// Every usable item must be one of the request's non-blank items; the
    /// returned value uses the request's spelling for each of them.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if the message is empty or the model
    /// returned an ingredient that was not submitted.
    pub fn conform(self, request: &InventoryRequest) -> AppResult<Self> {
        if self.message.trim().is_empty() {
            return Err(AppError::contract_violation(
                Self::CONTRACT,
                "message must not be empty",
            ));
        }
        let usable_items = canonical_subset(
            Self::CONTRACT,
            "usable_items",
            self.usable_items,
            &request.non_blank_items(),
        )?;
        Ok(Self {
            usable_items,
            message: self.message,
        })
    }
}
