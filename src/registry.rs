//! Known agents and their directory conventions.
//!
//! The table is fixed at compile time. Iteration order is the order
//! detection reports agents in.

use crate::types::{AgentDefinition, McpRootKey};

/// Every agent with built-in conventions, in detection order.
pub static KNOWN_AGENTS: &[AgentDefinition] = &[
    AgentDefinition {
        name: "copilot",
        detection_dir: ".github",
        skills_sub_path: ".github/skills",
        mcp_sub_path: ".vscode",
        mcp_file_name: "mcp.json",
        mcp_root_key: McpRootKey::Servers,
    },
    AgentDefinition {
        name: "claude",
        detection_dir: ".claude",
        skills_sub_path: ".claude/skills",
        mcp_sub_path: ".claude",
        mcp_file_name: "mcp.json",
        mcp_root_key: McpRootKey::McpServers,
    },
    AgentDefinition {
        name: "cursor",
        detection_dir: ".cursor",
        skills_sub_path: ".cursor/rules",
        mcp_sub_path: ".cursor",
        mcp_file_name: "mcp.json",
        mcp_root_key: McpRootKey::McpServers,
    },
    AgentDefinition {
        name: "roo",
        detection_dir: ".roo",
        skills_sub_path: ".roo/rules",
        mcp_sub_path: ".roo",
        mcp_file_name: "mcp.json",
        mcp_root_key: McpRootKey::McpServers,
    },
];

/// Looks up a known agent, ignoring ASCII case.
///
/// Returns `None` for agents without built-in conventions; callers fall back
/// to the `.<name>/` convention rather than treating this as an error.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static AgentDefinition> {
    KNOWN_AGENTS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

/// Returns `true` if `name` matches a known agent, ignoring ASCII case.
#[must_use]
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Iterates over the canonical names of all known agents.
pub fn known_agent_names() -> impl Iterator<Item = &'static str> {
    KNOWN_AGENTS.iter().map(|def| def.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_four_agents_in_order() {
        let names: Vec<_> = known_agent_names().collect();
        assert_eq!(names, ["copilot", "claude", "cursor", "roo"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Copilot").unwrap().name, "copilot");
        assert_eq!(lookup("CLAUDE").unwrap().name, "claude");
        assert_eq!(lookup("cUrSoR").unwrap().name, "cursor");
        assert_eq!(lookup("ROO").unwrap().name, "roo");
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup("windsurf").is_none());
        assert!(lookup("").is_none());
        assert!(!is_known(" claude"));
    }

    #[test]
    fn names_are_lowercase_and_unique() {
        for (i, def) in KNOWN_AGENTS.iter().enumerate() {
            assert_eq!(def.name, def.name.to_lowercase());
            assert!(
                KNOWN_AGENTS[i + 1..]
                    .iter()
                    .all(|other| !other.name.eq_ignore_ascii_case(def.name)),
                "duplicate agent {}",
                def.name
            );
        }
    }

    #[test]
    fn copilot_definition() {
        let def = lookup("copilot").unwrap();
        assert_eq!(def.detection_dir, ".github");
        assert_eq!(def.skills_sub_path, ".github/skills");
        assert_eq!(def.mcp_sub_path, ".vscode");
        assert_eq!(def.mcp_file_name, "mcp.json");
        assert_eq!(def.mcp_root_key, McpRootKey::Servers);
    }

    #[test]
    fn claude_definition() {
        let def = lookup("claude").unwrap();
        assert_eq!(def.detection_dir, ".claude");
        assert_eq!(def.skills_sub_path, ".claude/skills");
        assert_eq!(def.mcp_sub_path, ".claude");
        assert_eq!(def.mcp_file_name, "mcp.json");
        assert_eq!(def.mcp_root_key, McpRootKey::McpServers);
    }

    #[test]
    fn cursor_definition() {
        let def = lookup("cursor").unwrap();
        assert_eq!(def.detection_dir, ".cursor");
        assert_eq!(def.skills_sub_path, ".cursor/rules");
        assert_eq!(def.mcp_sub_path, ".cursor");
        assert_eq!(def.mcp_file_name, "mcp.json");
        assert_eq!(def.mcp_root_key, McpRootKey::McpServers);
    }

    #[test]
    fn roo_definition() {
        let def = lookup("roo").unwrap();
        assert_eq!(def.detection_dir, ".roo");
        assert_eq!(def.skills_sub_path, ".roo/rules");
        assert_eq!(def.mcp_sub_path, ".roo");
        assert_eq!(def.mcp_file_name, "mcp.json");
        assert_eq!(def.mcp_root_key, McpRootKey::McpServers);
    }
}
