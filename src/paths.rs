//! Skills and MCP path accessors.
//!
//! Known agents use their registry conventions. Any other name maps to a
//! `.<name>/` directory in the project root, with the name used exactly as
//! given. None of these functions touch the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::registry::lookup;
use crate::types::McpRootKey;

/// MCP configuration file name for agents without built-in conventions.
const DEFAULT_MCP_FILE_NAME: &str = "mcp.json";

/// Skills directory name for agents without built-in conventions.
const DEFAULT_SKILLS_DIR: &str = "skills";

fn convention_dir(project_dir: &Path, agent: &str) -> PathBuf {
    project_dir.join(format!(".{agent}"))
}

/// Returns the directory where `agent` reads skill files from.
///
/// - **Known**: the agent's skills sub-path, e.g. `.cursor/rules`
/// - **Unknown**: `.<agent>/skills`
#[must_use]
pub fn skills_path(project_dir: &Path, agent: &str) -> PathBuf {
    match lookup(agent) {
        Some(def) => def.skills_path(project_dir),
        None => convention_dir(project_dir, agent).join(DEFAULT_SKILLS_DIR),
    }
}

/// Returns the path of `agent`'s MCP configuration file.
///
/// - **Known**: e.g. `.vscode/mcp.json` for copilot, `.claude/mcp.json` for claude
/// - **Unknown**: `.<agent>/mcp.json`
#[must_use]
pub fn mcp_file_path(project_dir: &Path, agent: &str) -> PathBuf {
    match lookup(agent) {
        Some(def) => def.mcp_file_path(project_dir),
        None => convention_dir(project_dir, agent).join(DEFAULT_MCP_FILE_NAME),
    }
}

/// Returns the directory containing `agent`'s MCP configuration file.
#[must_use]
pub fn mcp_directory(project_dir: &Path, agent: &str) -> PathBuf {
    match lookup(agent) {
        Some(def) => def.mcp_directory(project_dir),
        None => convention_dir(project_dir, agent),
    }
}

/// Returns the key `agent`'s MCP file lists its servers under.
///
/// Unknown agents get [`McpRootKey::Servers`].
#[must_use]
pub fn mcp_root_key(agent: &str) -> McpRootKey {
    lookup(agent).map_or(McpRootKey::Servers, |def| def.mcp_root_key)
}

/// Every location a caller needs to install skills and MCP servers for one
/// agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AgentTarget {
    /// Agent identifier as resolved.
    pub name: String,
    /// Whether the agent has built-in conventions.
    pub known: bool,
    /// Skills directory.
    pub skills_path: PathBuf,
    /// Directory containing the MCP configuration file.
    pub mcp_directory: PathBuf,
    /// MCP configuration file.
    pub mcp_file_path: PathBuf,
    /// Key the MCP servers live under.
    pub mcp_root_key: McpRootKey,
}

impl AgentTarget {
    /// Computes the target locations of `agent` inside `project_dir`.
    #[must_use]
    pub fn new(project_dir: &Path, agent: &str) -> Self {
        Self {
            name: agent.to_string(),
            known: lookup(agent).is_some(),
            skills_path: skills_path(project_dir, agent),
            mcp_directory: mcp_directory(project_dir, agent),
            mcp_file_path: mcp_file_path(project_dir, agent),
            mcp_root_key: mcp_root_key(agent),
        }
    }
}

/// Computes an [`AgentTarget`] for each agent, preserving order.
#[must_use]
pub fn agent_targets<S: AsRef<str>>(project_dir: &Path, agents: &[S]) -> Vec<AgentTarget> {
    agents
        .iter()
        .map(|agent| AgentTarget::new(project_dir, agent.as_ref()))
        .collect()
}
