//! Layered resolution settings.
//!
//! Settings are merged from these sources, lowest priority first:
//!
//! 1. Defaults (auto-detect on, default agent `copilot`)
//! 2. Global file: `~/.config/agent-locate/config.yaml`
//! 3. Project file: `.agent-locate.yaml`, `.agent-locate.yml` or
//!    `.agent-locate.json` in the project root (first match)
//! 4. `AGENT_LOCATE_*` environment variables
//!
//! A file only overrides the keys it sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::paths::{AgentTarget, agent_targets};
use crate::platform;
use crate::resolve::resolve_agents;
use crate::types::FileFormat;

/// Environment variable overriding [`ResolveSettings::target_agents`].
pub const TARGET_AGENTS_ENV: &str = "AGENT_LOCATE_TARGET_AGENTS";

/// Environment variable overriding [`ResolveSettings::auto_detect`].
pub const AUTO_DETECT_ENV: &str = "AGENT_LOCATE_AUTO_DETECT";

/// Environment variable overriding [`ResolveSettings::default_agents`].
pub const DEFAULT_AGENTS_ENV: &str = "AGENT_LOCATE_DEFAULT_AGENTS";

const GLOBAL_FILE_NAME: &str = "config.yaml";

const PROJECT_FILE_NAMES: &[&str] = &[
    ".agent-locate.yaml",
    ".agent-locate.yml",
    ".agent-locate.json",
];

/// Inputs to [`resolve_agents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveSettings {
    /// Explicit agent list. Takes precedence over everything else when set.
    pub target_agents: String,
    /// Whether to detect agents from their directories.
    pub auto_detect: bool,
    /// Agent list used when nothing explicit or detected applies.
    pub default_agents: String,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            target_agents: String::new(),
            auto_detect: true,
            default_agents: crate::resolve::FALLBACK_AGENT.to_string(),
        }
    }
}

/// Agent list as written in a settings file: either a delimited string or
/// a sequence of names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AgentList {
    Joined(String),
    Items(Vec<String>),
}

impl AgentList {
    fn into_joined(self) -> String {
        match self {
            Self::Joined(s) => s,
            Self::Items(items) => items.join(";"),
        }
    }
}

/// On-disk settings; absent keys leave the current value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, alias = "target_agents")]
    target_agents: Option<AgentList>,
    #[serde(default, alias = "auto_detect")]
    auto_detect: Option<bool>,
    #[serde(default, alias = "default_agents")]
    default_agents: Option<AgentList>,
}

impl ResolveSettings {
    /// Loads settings from a JSON or YAML file on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for extensions other than
    /// `.json`, `.yaml` and `.yml`, [`Error::Io`] if the file cannot be read,
    /// or a parse error if it is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut settings = Self::default();
        settings.merge(read_settings_file(path)?);
        Ok(settings)
    }

    /// Builds settings for `project_dir` from every source.
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    #[must_use]
    pub fn discover(project_dir: &Path) -> Self {
        let global_file = platform::global_config_dir()
            .ok()
            .map(|dir| dir.join(GLOBAL_FILE_NAME));
        Self::discover_from(project_dir, global_file.as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    fn discover_from<F>(project_dir: &Path, global_file: Option<&Path>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = global_file.filter(|p| p.is_file()) {
            settings.merge_file_lenient(path);
        }

        if let Some(path) = find_project_file(project_dir) {
            settings.merge_file_lenient(&path);
        }

        settings.apply_env_with(env);
        settings
    }

    /// Applies `AGENT_LOCATE_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Applies overrides using `lookup` to read variables.
    ///
    /// Unrecognized boolean values are ignored with a warning.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(TARGET_AGENTS_ENV) {
            self.target_agents = value;
        }

        if let Some(value) = lookup(AUTO_DETECT_ENV) {
            match parse_bool(&value) {
                Some(flag) => self.auto_detect = flag,
                None => warn!(var = AUTO_DETECT_ENV, %value, "ignoring invalid boolean"),
            }
        }

        if let Some(value) = lookup(DEFAULT_AGENTS_ENV) {
            self.default_agents = value;
        }
    }

    /// Resolves the agents for `project_dir` using these settings.
    #[must_use]
    pub fn resolve(&self, project_dir: &Path) -> Vec<String> {
        resolve_agents(
            project_dir,
            &self.target_agents,
            self.auto_detect,
            &self.default_agents,
        )
    }

    /// Resolves the agents and computes their target locations.
    #[must_use]
    pub fn targets(&self, project_dir: &Path) -> Vec<AgentTarget> {
        agent_targets(project_dir, &self.resolve(project_dir))
    }

    fn merge(&mut self, file: SettingsFile) {
        if let Some(agents) = file.target_agents {
            self.target_agents = agents.into_joined();
        }
        if let Some(flag) = file.auto_detect {
            self.auto_detect = flag;
        }
        if let Some(agents) = file.default_agents {
            self.default_agents = agents.into_joined();
        }
    }

    fn merge_file_lenient(&mut self, path: &Path) {
        match read_settings_file(path) {
            Ok(file) => {
                debug!(path = %path.display(), "loaded settings");
                self.merge(file);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping settings file"),
        }
    }
}

fn find_project_file(project_dir: &Path) -> Option<PathBuf> {
    PROJECT_FILE_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.is_file())
}

fn read_settings_file(path: &Path) -> Result<SettingsFile> {
    let format =
        FileFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    Ok(match format {
        FileFormat::Json => serde_json::from_str(&content)?,
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
