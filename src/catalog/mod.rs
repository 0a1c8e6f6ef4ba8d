//! Catalog Module
//!
//! Static program data: the agent roster, department groupings,
//! platform integrations, the five built-in showcases and the annual
//! report narrative. Everything here is fixed at compile time.
//!
//! # Structure
//!
//! - [`agents`]: Agent, department and platform tables with aggregates
//! - [`showcases`]: The five built-in scripted showcases
//! - [`story`]: Report narrative constants

pub mod agents;
pub mod showcases;
pub mod story;

pub use agents::{
    active_agents, find_agent, find_department, total_savings, Agent, AgentKind, AgentStatus,
    Department, PlatformIntegration, AGENTS, DEPARTMENTS, PLATFORM_INTEGRATIONS,
};
pub use showcases::SHOWCASES;
