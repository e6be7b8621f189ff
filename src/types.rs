//! Core type definitions.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Top-level key under which an agent's MCP JSON file lists its servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum McpRootKey {
    /// `"servers"`, the VS Code schema.
    #[serde(rename = "servers")]
    Servers,
    /// `"mcpServers"`, used by Claude, Cursor and Roo.
    #[serde(rename = "mcpServers")]
    McpServers,
}

impl McpRootKey {
    /// Returns the JSON key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Servers => "servers",
            Self::McpServers => "mcpServers",
        }
    }
}

impl fmt::Display for McpRootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory conventions of a known agent.
///
/// Sub-paths are relative to the project root and use `/` between segments
/// regardless of platform; the path accessors join them segment by segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    /// Canonical lowercase identifier.
    pub name: &'static str,
    /// Directory whose presence marks the agent as in use.
    pub detection_dir: &'static str,
    /// Where the agent reads skill files from.
    pub skills_sub_path: &'static str,
    /// Directory containing the MCP configuration file.
    pub mcp_sub_path: &'static str,
    /// MCP configuration file name.
    pub mcp_file_name: &'static str,
    /// Top-level key inside the MCP configuration file.
    pub mcp_root_key: McpRootKey,
}

impl AgentDefinition {
    /// Returns the detection directory under `project_root`.
    #[must_use]
    pub fn detection_path(&self, project_root: &Path) -> PathBuf {
        join_relative(project_root, self.detection_dir)
    }

    /// Returns `true` if the detection directory exists under `project_root`.
    #[must_use]
    pub fn is_present(&self, project_root: &Path) -> bool {
        self.detection_path(project_root).is_dir()
    }

    /// Returns the skills directory under `project_root`.
    #[must_use]
    pub fn skills_path(&self, project_root: &Path) -> PathBuf {
        join_relative(project_root, self.skills_sub_path)
    }

    /// Returns the directory holding the MCP configuration file.
    #[must_use]
    pub fn mcp_directory(&self, project_root: &Path) -> PathBuf {
        join_relative(project_root, self.mcp_sub_path)
    }

    /// Returns the full path of the MCP configuration file.
    #[must_use]
    pub fn mcp_file_path(&self, project_root: &Path) -> PathBuf {
        self.mcp_directory(project_root).join(self.mcp_file_name)
    }
}

fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml` or `.yml`).
    Yaml,
}

impl FileFormat {
    /// Infers the format from a file extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: AgentDefinition = AgentDefinition {
        name: "nested",
        detection_dir: ".nested",
        skills_sub_path: ".nested/deep/skills",
        mcp_sub_path: ".config/nested",
        mcp_file_name: "servers.json",
        mcp_root_key: McpRootKey::McpServers,
    };

    #[test]
    fn skills_path_joins_every_segment() {
        let root = PathBuf::from("/some/project");
        assert_eq!(
            NESTED.skills_path(&root),
            root.join(".nested").join("deep").join("skills")
        );
    }

    #[test]
    fn mcp_file_path_uses_definition_file_name() {
        let root = PathBuf::from("/some/project");
        assert_eq!(
            NESTED.mcp_file_path(&root),
            root.join(".config").join("nested").join("servers.json")
        );
        assert_eq!(
            NESTED.mcp_directory(&root),
            root.join(".config").join("nested")
        );
    }

    #[test]
    fn is_present_requires_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!NESTED.is_present(dir.path()));

        std::fs::write(dir.path().join(".nested"), "").unwrap();
        assert!(!NESTED.is_present(dir.path()));

        std::fs::remove_file(dir.path().join(".nested")).unwrap();
        std::fs::create_dir(dir.path().join(".nested")).unwrap();
        assert!(NESTED.is_present(dir.path()));
    }

    #[test]
    fn mcp_root_key_strings() {
        assert_eq!(McpRootKey::Servers.as_str(), "servers");
        assert_eq!(McpRootKey::McpServers.to_string(), "mcpServers");
        assert_eq!(
            serde_json::to_string(&McpRootKey::McpServers).unwrap(),
            "\"mcpServers\""
        );
    }

    #[test]
    fn file_format_from_extension() {
        assert_eq!(
            FileFormat::from_path(Path::new("a/config.json")),
            Some(FileFormat::Json)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("config.YML")),
            Some(FileFormat::Yaml)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("config.yaml")),
            Some(FileFormat::Yaml)
        );
        assert_eq!(FileFormat::from_path(Path::new("config.toml")), None);
        assert_eq!(FileFormat::from_path(Path::new("config")), None);
    }
}
