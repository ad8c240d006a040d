// ABOUTME: Typed request/response contracts for every planner stage
// ABOUTME: Provides the strict decode-and-validate boundary for model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stage Contracts
//!
//! Every value exchanged between the HTTP boundary, the agents and the model
//! gateway is one of the types in this module. Contracts produced by the model
//! implement [`ModelContract`]: the raw JSON document is first decoded into the
//! typed shape (any missing or mistyped field is a
//! [`ContractViolation`](crate::errors::ErrorCode::ContractViolation)) and then
//! checked against the semantic invariants of its stage.

mod composite;
mod diet;
mod inventory;
mod recipe;

pub use composite::{CompositeRequest, CompositeResult};
pub use diet::{DietRequest, DietResult};
pub use inventory::{InventoryRequest, InventoryResult};
pub use recipe::{RecipePlanRequest, RecipePlanResult, RecipeStep, RecommendRequest, RecommendResult};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// A contract whose instances are produced by the external model
pub trait ModelContract: DeserializeOwned {
    /// Contract name used in error messages
    const CONTRACT: &'static str;

    /// Decode a generic JSON document into this contract
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if the document is not an object or any
    /// required field is missing or mistyped. No field is defaulted.
    fn from_document(document: Value) -> AppResult<Self> {
        if !document.is_object() {
            return Err(AppError::contract_violation(
                Self::CONTRACT,
                format!("expected a JSON object, got {}", json_kind(&document)),
            ));
        }
        serde_json::from_value(document)
            .map_err(|e| AppError::contract_violation(Self::CONTRACT, e.to_string()))
    }
}

/// Comparison key for ingredient membership checks (Unicode lowercase)
fn item_key(item: &str) -> String {
    item.trim().to_lowercase()
}

/// Map `candidates` onto members of `allowed`, keeping the spelling of `allowed`
///
/// Matching ignores surrounding whitespace. An exact match wins; otherwise the
/// first entry equal up to letter case is used. Blank entries in `allowed` are
/// never matchable.
fn canonical_subset(
    contract: &str,
    field: &str,
    candidates: Vec<String>,
    allowed: &[String],
) -> AppResult<Vec<String>> {
    candidates
        .into_iter()
        .map(|candidate| {
            let key = item_key(&candidate);
            if key.is_empty() {
                return Err(AppError::contract_violation(
                    contract,
                    format!("{field} contains a blank entry"),
                ));
            }
            let trimmed = candidate.trim();
            allowed
                .iter()
                .find(|item| item.trim() == trimmed)
                .or_else(|| allowed.iter().find(|item| item_key(item) == key))
                .cloned()
                .ok_or_else(|| {
                    AppError::contract_violation(
                        contract,
                        format!("{field} contains '{candidate}', which is not in the request"),
                    )
                })
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
