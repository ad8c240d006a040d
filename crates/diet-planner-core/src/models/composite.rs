// ABOUTME: Composite contracts for the combined inventory and diet flow
// ABOUTME: Bundles usable items, diet-filtered items and recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{DietRequest, InventoryRequest};

/// Raw items plus a diet, processed by the inventory and diet stages in turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRequest {
    /// Raw ingredient strings
    pub items: Vec<String>,
    /// Free-text diet
    pub diet: String,
}

impl CompositeRequest {
    /// Request for the inventory stage
    #[must_use]
    pub fn inventory_request(&self) -> InventoryRequest {
        InventoryRequest::new(self.items.clone())
    }

    /// Request for the diet stage, fed with the inventory stage's usable items
    #[must_use]
    pub fn diet_request(&self, usable_items: Vec<String>) -> DietRequest {
        DietRequest {
            items: usable_items,
            diet: self.diet.clone(),
        }
    }
}

/// Combined outcome of the inventory and diet stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Output of the inventory stage
    pub usable_items: Vec<String>,
    /// Diet-compatible subset of `usable_items`
    pub diet_filtered: Vec<String>,
    /// Recipe idea titles
    pub suggestions: Vec<String>,
}
