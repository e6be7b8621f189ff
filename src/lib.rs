#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`registry`] - Known agents and their directory conventions
//! - [`resolve`] - Agent list parsing, detection and resolution
//! - [`paths`] - Skills and MCP path accessors
//! - [`settings`] - Layered resolution settings
//! - [`types`] - Core type definitions
//! - [`error`] - Error types

pub mod error;
pub mod paths;
pub mod platform;
pub mod registry;
pub mod resolve;
pub mod settings;
pub mod types;

pub use error::{Error, Result};
pub use paths::{
    AgentTarget, agent_targets, mcp_directory, mcp_file_path, mcp_root_key, skills_path,
};
pub use registry::{KNOWN_AGENTS, is_known, known_agent_names, lookup};
pub use resolve::{FALLBACK_AGENT, detect_agents, parse_agent_list, resolve_agents};
pub use settings::ResolveSettings;
pub use types::{AgentDefinition, FileFormat, McpRootKey};
