//! Prompt Composition and Theme Management
//!
//! Builds the styled `user@host:path (branch)$ ` prompt and holds the
//! immutable theme registry. Themes are three 24-bit RGB style tokens:
//! user/host, path, and git branch. The git segment is discovered fresh on
//! every composition by walking up to the nearest `.git` directory and
//! reading its metadata files directly.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::{Color, Stylize};

/// A named set of prompt style tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub user_host: Color,
    pub path: Color,
    pub branch: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Immutable registry mapping theme names to themes, built once per session
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<&'static str, Theme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert(
            "default",
            Theme {
                user_host: rgb(46, 204, 113),
                path: rgb(52, 152, 219),
                branch: rgb(241, 196, 15),
            },
        );
        themes.insert(
            "dracula",
            Theme {
                user_host: rgb(189, 147, 249),
                path: rgb(139, 233, 253),
                branch: rgb(80, 250, 123),
            },
        );
        themes.insert(
            "nord",
            Theme {
                user_host: rgb(143, 188, 187),
                path: rgb(129, 161, 193),
                branch: rgb(191, 97, 106),
            },
        );
        themes.insert(
            "solarized",
            Theme {
                user_host: rgb(38, 139, 210),
                path: rgb(133, 153, 0),
                branch: rgb(211, 54, 130),
            },
        );
        themes.insert(
            "gruvbox",
            Theme {
                user_host: rgb(250, 189, 47),
                path: rgb(146, 131, 116),
                branch: rgb(215, 95, 0),
            },
        );
        themes.insert(
            "monokai",
            Theme {
                user_host: rgb(249, 38, 114),
                path: rgb(166, 226, 46),
                branch: rgb(102, 217, 239),
            },
        );
        Self { themes }
    }

    pub fn get(&self, name: &str) -> Option<Theme> {
        self.themes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Theme names in alphabetical order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.themes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the full styled prompt for the current working directory.
/// Path and git state are recomputed fresh, never cached.
pub fn compose_prompt(theme: &Theme, user: &str, host: &str, show_branch: bool) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let path = display_path(&cwd, dirs::home_dir().as_deref());
    let branch = if show_branch {
        git_segment(&cwd)
    } else {
        String::new()
    };

    format!(
        "{}:{}{}$ ",
        format!("{}@{}", user, host).with(theme.user_host),
        path.with(theme.path),
        branch.with(theme.branch),
    )
}

/// Render a path for display: home prefix replaced by `~`, forward slashes
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    let shown = match home {
        Some(home) => match path.strip_prefix(home) {
            Ok(rest) if rest.as_os_str().is_empty() => return "~".to_string(),
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => path.display().to_string(),
        },
        None => path.display().to_string(),
    };
    shown.replace('\\', "/")
}

/// Walk up from `start` looking for a `.git` directory
fn find_git_dir(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(".git");
        if candidate.is_dir() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Branch indicator for the prompt: ` (branch)`, with an in-progress
/// ` | REBASE` or ` | MERGE` tag appended. Empty outside a repository or
/// when HEAD is detached.
pub fn git_segment(cwd: &Path) -> String {
    let git_dir = match find_git_dir(cwd) {
        Some(dir) => dir,
        None => return String::new(),
    };

    let branch = match read_head_branch(&git_dir) {
        Some(branch) => branch,
        None => return String::new(),
    };

    let state = if git_dir.join("rebase-merge").exists() || git_dir.join("rebase-apply").exists() {
        " | REBASE"
    } else if git_dir.join("MERGE_HEAD").exists() {
        " | MERGE"
    } else {
        ""
    };

    format!(" ({}{})", branch, state)
}

/// First line of `.git/HEAD`, stripped of the symbolic-ref prefix
pub fn read_head_branch(git_dir: &Path) -> Option<String> {
    let head = fs::read_to_string(git_dir.join("HEAD")).ok()?;
    let line = head.lines().next()?;
    line.strip_prefix("ref: refs/heads/")
        .map(|branch| branch.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_themes() {
        let registry = ThemeRegistry::new();
        for name in ["default", "dracula", "nord", "solarized", "gruvbox", "monokai"] {
            assert!(registry.contains(name), "missing theme {}", name);
        }
        assert!(!registry.contains("vaporwave"));
        assert_eq!(registry.names().len(), 6);
    }

    #[test]
    fn test_default_theme_colors() {
        let registry = ThemeRegistry::new();
        let theme = registry.get("default").unwrap();
        assert_eq!(theme.user_host, rgb(46, 204, 113));
        assert_eq!(theme.path, rgb(52, 152, 219));
        assert_eq!(theme.branch, rgb(241, 196, 15));
    }

    #[test]
    fn test_display_path_home_substitution() {
        let home = Path::new("/home/dev");
        assert_eq!(display_path(Path::new("/home/dev"), Some(home)), "~");
        assert_eq!(
            display_path(Path::new("/home/dev/projects/oxsh"), Some(home)),
            "~/projects/oxsh"
        );
        assert_eq!(display_path(Path::new("/etc"), Some(home)), "/etc");
        assert_eq!(display_path(Path::new("/tmp"), None), "/tmp");
    }

    #[test]
    fn test_read_head_branch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("HEAD"), "ref: refs/heads/main\n").unwrap();
        assert_eq!(read_head_branch(dir.path()), Some("main".to_string()));

        // Detached HEAD carries a bare commit hash, no branch to show
        fs::write(dir.path().join("HEAD"), "a1b2c3d4\n").unwrap();
        assert_eq!(read_head_branch(dir.path()), None);
    }

    #[test]
    fn test_git_segment_states() {
        let repo = tempfile::tempdir().unwrap();
        let git_dir = repo.path().join(".git");
        fs::create_dir(&git_dir).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/feature\n").unwrap();

        assert_eq!(git_segment(repo.path()), " (feature)");

        fs::write(git_dir.join("MERGE_HEAD"), "deadbeef\n").unwrap();
        assert_eq!(git_segment(repo.path()), " (feature | MERGE)");

        // Rebase markers take precedence over a merge head
        fs::create_dir(git_dir.join("rebase-merge")).unwrap();
        assert_eq!(git_segment(repo.path()), " (feature | REBASE)");
    }

    #[test]
    fn test_git_segment_in_subdirectory() {
        let repo = tempfile::tempdir().unwrap();
        let git_dir = repo.path().join(".git");
        fs::create_dir(&git_dir).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        let nested = repo.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(git_segment(&nested), " (main)");
    }

    #[test]
    fn test_git_segment_outside_repo() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(git_segment(dir.path()), "");
    }
}
