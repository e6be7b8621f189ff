//! Agent list parsing, detection and resolution.

use std::path::Path;

use tracing::{debug, trace};

use crate::registry::KNOWN_AGENTS;

/// Agent used when no explicit list, detection result or default applies.
///
/// This is a literal rather than the first entry of [`KNOWN_AGENTS`]; keep
/// it in sync if the table is reordered.
pub const FALLBACK_AGENT: &str = "copilot";

/// Resolves the agents to operate on for `project_dir`.
///
/// The first satisfied source wins:
///
/// 1. `explicit_agents`, if it is not blank
/// 2. [`detect_agents`], if `auto_detect` is set and it finds anything
/// 3. `default_agents`, if it is not blank
/// 4. [`FALLBACK_AGENT`]
///
/// Lists are parsed with [`parse_agent_list`]. The only filesystem access is
/// the directory probing done by detection.
#[must_use]
pub fn resolve_agents(
    project_dir: &Path,
    explicit_agents: &str,
    auto_detect: bool,
    default_agents: &str,
) -> Vec<String> {
    if !explicit_agents.trim().is_empty() {
        let agents = parse_agent_list(explicit_agents);
        debug!(?agents, "using explicit agents");
        return agents;
    }

    if auto_detect {
        let detected = detect_agents(project_dir);
        if !detected.is_empty() {
            debug!(agents = ?detected, project = %project_dir.display(), "using detected agents");
            return detected;
        }
        debug!(project = %project_dir.display(), "no agents detected");
    }

    if !default_agents.trim().is_empty() {
        let agents = parse_agent_list(default_agents);
        debug!(?agents, "using default agents");
        return agents;
    }

    debug!(agent = FALLBACK_AGENT, "using fallback agent");
    vec![FALLBACK_AGENT.to_string()]
}

/// Returns the known agents whose detection directory exists in
/// `project_dir`, in registry order.
#[must_use]
pub fn detect_agents(project_dir: &Path) -> Vec<String> {
    KNOWN_AGENTS
        .iter()
        .filter(|def| {
            let present = def.is_present(project_dir);
            trace!(agent = def.name, dir = def.detection_dir, present, "probed agent");
            present
        })
        .map(|def| def.name.to_string())
        .collect()
}

/// Parses a `;`- or `,`-separated agent list such as `"copilot;claude,cursor"`.
///
/// Entries are trimmed and lowercased; empty entries are dropped and
/// duplicates keep their first position. Blank input yields an empty list.
#[must_use]
pub fn parse_agent_list(raw: &str) -> Vec<String> {
    let mut agents: Vec<String> = Vec::new();
    for entry in raw.split([';', ',']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let entry = entry.to_lowercase();
        if !agents.contains(&entry) {
            agents.push(entry);
        }
    }
    agents
}
