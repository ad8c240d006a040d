// ABOUTME: Planner agents that drive the model gateway through typed stage contracts
// ABOUTME: Stage agents (inventory, diet) and composite agents (manager, planner)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Agents
//!
//! Stage agents own one prompt and one contract pair each. Composite agents
//! chain stage agents: the manager runs inventory cleanup then diet filtering,
//! and the planner expands recipe ideas into full recipes.
//!
//! All agents are stateless and cheap to clone. A failure at any stage aborts
//! the whole call; no agent returns a partial result.

/// Diet compatibility stage
pub mod diet;
/// Inventory cleanup stage
pub mod inventory;
/// Inventory then diet composition
pub mod manager;
/// Recipe planning and recommendation fan-out
pub mod planner;

pub use diet::DietAgent;
pub use inventory::InventoryAgent;
pub use manager::ManagerAgent;
pub use planner::PlannerAgent;
