// ABOUTME: Diet stage contracts for compatibility filtering and recipe ideas
// ABOUTME: Defines DietRequest and the model-produced DietResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{canonical_subset, ModelContract};
use crate::errors::{AppError, AppResult};

/// Ingredients to check against a dietary constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRequest {
    /// Candidate ingredients
    pub items: Vec<String>,
    /// Free-text diet, forwarded verbatim to the model
    pub diet: String,
}

/// Diet-compatible ingredients plus recipe idea titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietResult {
    /// Subset of the request items that fit the diet
    pub compatible_items: Vec<String>,
    /// Recipe titles only, no descriptions
    #[serde(rename = "suggested_recipe_ideas", alias = "recipe_ideas")]
    pub recipe_ideas: Vec<String>,
}

impl ModelContract for DietResult {
    const CONTRACT: &'static str = "DietResult";
}

impl DietResult {
    /// Check this result against the request that produced it
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if a compatible item was not in the request
    /// or a recipe idea title is blank.
    pub fn conform(self, request: &DietRequest) -> AppResult<Self> {
        let compatible_items = canonical_subset(
            Self::CONTRACT,
            "compatible_items",
            self.compatible_items,
            &request.items,
        )?;

        let recipe_ideas = self
            .recipe_ideas
            .into_iter()
            .map(|idea| {
                let title = idea.trim();
                if title.is_empty() {
                    Err(AppError::contract_violation(
                        Self::CONTRACT,
                        "suggested_recipe_ideas contains a blank title",
                    ))
                } else {
                    Ok(title.to_owned())
                }
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            compatible_items,
            recipe_ideas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    fn request() -> DietRequest {
        DietRequest {
            items: vec!["tomato".to_owned(), "chicken breast".to_owned()],
            diet: "vegan".to_owned(),
        }
    }

    #[test]
    fn test_recipe_ideas_use_suggested_wire_name() {
        let result = DietResult {
            compatible_items: vec![],
            recipe_ideas: vec!["Tomato Soup".to_owned()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suggested_recipe_ideas"][0], "Tomato Soup");
        assert!(json.get("recipe_ideas").is_none());
    }

    #[test]
    fn test_recipe_ideas_alias_accepted() {
        let result = DietResult::from_document(json!({
            "compatible_items": ["tomato"],
            "recipe_ideas": ["Gazpacho"]
        }))
        .unwrap();
        assert_eq!(result.recipe_ideas, vec!["Gazpacho"]);
    }

    #[test]
    fn test_conform_keeps_subset_and_trims_titles() {
        let result = DietResult {
            compatible_items: vec!["tomato".to_owned()],
            recipe_ideas: vec!["  Tomato Salad ".to_owned()],
        }
        .conform(&request())
        .unwrap();
        assert_eq!(result.compatible_items, vec!["tomato"]);
        assert_eq!(result.recipe_ideas, vec!["Tomato Salad"]);
    }

    #[test]
    fn test_conform_rejects_items_outside_request() {
        let err = DietResult {
            compatible_items: vec!["lentils".to_owned()],
            recipe_ideas: vec![],
        }
        .conform(&request())
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContractViolation);
    }

    #[test]
    fn test_conform_rejects_blank_title() {
        let err = DietResult {
            compatible_items: vec![],
            recipe_ideas: vec![String::new()],
        }
        .conform(&request())
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContractViolation);
    }
}
