// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds immutable configuration, the model gateway and the planner agents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server resources
//!
//! Built once at startup and shared behind an `Arc`. Nothing in here is
//! mutated after construction, so requests never contend on it.

use diet_planner_core::errors::AppResult;
use std::sync::Arc;

use crate::agents::{DietAgent, InventoryAgent, ManagerAgent, PlannerAgent};
use crate::config::ServerConfig;
use crate::llm::{ModelGateway, OpenAiCompatibleGateway};

/// Everything a request handler needs
#[derive(Clone)]
pub struct ServerResources {
    /// Service configuration
    pub config: Arc<ServerConfig>,
    /// Gateway shared by all agents
    pub gateway: Arc<dyn ModelGateway>,
    /// Inventory stage
    pub inventory_agent: InventoryAgent,
    /// Diet stage
    pub diet_agent: DietAgent,
    /// Inventory then diet
    pub manager_agent: ManagerAgent,
    /// Plans and recommendations
    pub planner_agent: PlannerAgent,
}

impl ServerResources {
    /// Wire every agent to `gateway`
    #[must_use]
    pub fn new(config: ServerConfig, gateway: Arc<dyn ModelGateway>) -> Self {
        let inventory_agent = InventoryAgent::new(Arc::clone(&gateway));
        let diet_agent = DietAgent::new(Arc::clone(&gateway));
        let manager_agent = ManagerAgent::new(inventory_agent.clone(), diet_agent.clone());
        let planner_agent = PlannerAgent::new(
            Arc::clone(&gateway),
            manager_agent.clone(),
            config.recommend,
        );

        Self {
            config: Arc::new(config),
            gateway,
            inventory_agent,
            diet_agent,
            manager_agent,
            planner_agent,
        }
    }

    /// Build resources backed by the `OpenAI`-compatible gateway from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let gateway: Arc<dyn ModelGateway> =
            Arc::new(OpenAiCompatibleGateway::new(config.llm.clone())?);
        Ok(Self::new(config, gateway))
    }
}
