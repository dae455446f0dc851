//! Shell Configuration
//!
//! Session-scoped settings with environment overrides. Nothing here is
//! persisted; history and theme selection live and die with the process.

use serde::{Deserialize, Serialize};

/// Configuration for one shell session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Name of the active prompt theme
    pub theme: String,
    /// Whether the prompt shows the git branch segment
    pub show_git_branch: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_git_branch: true,
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by `OXSH_THEME` and `OXSH_GIT_BRANCH`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(theme) = std::env::var("OXSH_THEME") {
            if !theme.is_empty() {
                config.theme = theme;
            }
        }
        if let Ok(value) = std::env::var("OXSH_GIT_BRANCH") {
            config.show_git_branch = !matches!(value.as_str(), "0" | "false" | "off");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.theme, "default");
        assert!(config.show_git_branch);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("OXSH_THEME", "nord");
        std::env::set_var("OXSH_GIT_BRANCH", "off");
        let config = ShellConfig::from_env();
        assert_eq!(config.theme, "nord");
        assert!(!config.show_git_branch);

        std::env::remove_var("OXSH_THEME");
        std::env::remove_var("OXSH_GIT_BRANCH");
        let config = ShellConfig::from_env();
        assert_eq!(config.theme, "default");
        assert!(config.show_git_branch);
    }
}
