//! Platform-specific path helpers.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns [`Error::HomeNotFound`] if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(Error::HomeNotFound)
}

/// Returns the directory holding the user-wide settings file.
///
/// This is `~/.config/agent-locate/` on every platform.
pub fn global_config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".config").join("agent-locate"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_config_dir_is_under_home() {
        // Skip if home dir cannot be determined (CI environments)
        let Ok(home) = home_dir() else {
            return;
        };

        let dir = global_config_dir().unwrap();
        assert!(dir.starts_with(&home));
        assert!(dir.ends_with("agent-locate"));
    }
}
