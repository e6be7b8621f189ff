//! Error types for agent-locate.
//!
//! Agent resolution and path lookup never fail; errors only come from
//! loading [`ResolveSettings`](crate::settings::ResolveSettings) files.

use std::path::PathBuf;

/// Errors that can occur while loading resolution settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON settings file is malformed.
    #[error("invalid JSON settings: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A YAML settings file is malformed.
    #[error("invalid YAML settings: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The settings file extension is neither JSON nor YAML.
    #[error("unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The home directory could not be determined.
    #[error("home directory not found")]
    HomeNotFound,
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
