//! Shell Commands Module
//!
//! The fixed command surface dispatched by the outer loop: parsing a line
//! into tokens, mapping the first token to a built-in, and the filesystem
//! and subprocess handlers themselves. These are deterministic I/O wrappers:
//! every failure is reported as a styled message and absorbed here, nothing
//! propagates to the read loop.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Local};
use crossterm::style::{Color, Stylize};
use crossterm::terminal;

/// Built-in commands recognized by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    ChangeDir,
    PrintWorkingDir,
    MakeDir,
    RemoveDir,
    Touch,
    Remove,
    Cat,
    Clear,
    Git,
    Theme,
    Exit,
    /// Anything unrecognized, passed verbatim to the host shell
    External,
}

impl ShellCommand {
    pub fn from_token(token: &str) -> Self {
        match token {
            "help" => Self::Help,
            "ls" | "dir" => Self::List,
            "cd" => Self::ChangeDir,
            "pwd" => Self::PrintWorkingDir,
            "mkdir" => Self::MakeDir,
            "rmdir" => Self::RemoveDir,
            "touch" => Self::Touch,
            "rm" => Self::Remove,
            "cat" => Self::Cat,
            "clear" | "cls" => Self::Clear,
            "git" => Self::Git,
            "theme" => Self::Theme,
            "exit" | "quit" => Self::Exit,
            _ => Self::External,
        }
    }

    /// Usage and description pairs for the help table
    pub fn help_entries() -> &'static [(&'static str, &'static str)] {
        &[
            ("help", "Show this help"),
            ("ls/dir [-l] [path]", "List files and directories"),
            ("cd [path|~|-]", "Change directory"),
            ("pwd", "Print the current directory"),
            ("mkdir <name>", "Create a directory"),
            ("rmdir <name>", "Remove a directory"),
            ("touch <file>", "Create an empty file"),
            ("rm <file>", "Remove a file"),
            ("cat <file>", "Show file contents"),
            ("clear/cls", "Clear the screen"),
            ("git <command>", "Run git commands"),
            ("theme [name]", "Switch or pick the color theme"),
            ("exit/quit", "Leave the shell"),
        ]
    }
}

/// Split a command line into tokens: space-separated, with `"` toggling a
/// quoted section. Quotes are stripped; there are no escapes.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '"' => in_quotes = !in_quotes,
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

pub fn show_help() {
    let rule = "=".repeat(68);
    println!("{}", rule.clone().cyan());
    println!("{}", "                         AVAILABLE COMMANDS".bold().white());
    println!("{}", rule.clone().cyan());
    for (usage, description) in ShellCommand::help_entries() {
        println!(
            "{} {} {}",
            format!("{:<25}", usage).green(),
            "|".white(),
            description.white()
        );
    }
    println!("{}", rule.cyan());
}

fn extension_color(path: &Path) -> Color {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "rs" | "c" | "cpp" | "h" => Color::Cyan,
        "sh" | "exe" => Color::Green,
        "md" => Color::Yellow,
        "txt" => Color::White,
        _ => Color::Grey,
    }
}

/// `ls`/`dir`: columnar listing sized to the terminal width, or `-l` long
/// form with size and modification time. An unreadable directory is a user
/// error, not a failure.
pub fn list_directory(args: &[String]) {
    let mut path = ".".to_string();
    let mut long_listing = false;
    for arg in args {
        if arg == "-l" {
            long_listing = true;
        } else {
            path = arg.clone();
        }
    }

    let entries = match fs::read_dir(&path) {
        Ok(iter) => iter.flatten().collect::<Vec<_>>(),
        Err(_) => {
            println!("{}", format!("Error: cannot access directory {}", path).red());
            return;
        }
    };

    if long_listing {
        for entry in &entries {
            print_long_entry(entry);
        }
    } else {
        print_columns(&entries);
    }
}

fn print_long_entry(entry: &fs::DirEntry) {
    let name = entry.file_name().to_string_lossy().to_string();
    let metadata = match entry.metadata() {
        Ok(metadata) => metadata,
        Err(_) => return,
    };

    let mtime = metadata
        .modified()
        .map(|t| DateTime::<Local>::from(t).format("%b %d %H:%M").to_string())
        .unwrap_or_else(|_| String::from("            "));

    if metadata.is_dir() {
        println!(
            "drwxr-xr-x {:>10} {}  {}",
            "",
            mtime,
            format!("{}/", name).blue().bold()
        );
    } else {
        println!(
            "-rw-r--r-- {:>10} {}  {}",
            metadata.len(),
            mtime,
            name.with(extension_color(&entry.path()))
        );
    }
}

fn print_columns(entries: &[fs::DirEntry]) {
    if entries.is_empty() {
        return;
    }

    let names: Vec<(String, bool, PathBuf)> = entries
        .iter()
        .map(|e| {
            let is_dir = e.file_type().map(|t| t.is_dir()).unwrap_or(false);
            (e.file_name().to_string_lossy().to_string(), is_dir, e.path())
        })
        .collect();

    let max_len = names.iter().map(|(n, _, _)| n.chars().count()).max().unwrap_or(0);
    let term_width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
    let col_width = max_len + 2;
    let num_cols = (term_width / col_width.max(1)).max(1);

    for (i, (name, is_dir, path)) in names.iter().enumerate() {
        let suffix = if *is_dir { "/" } else { " " };
        let cell = format!("{:<width$}", format!("{}{}", name, suffix), width = col_width);
        if *is_dir {
            print!("{}", cell.blue().bold());
        } else {
            print!("{}", cell.with(extension_color(path)));
        }
        if (i + 1) % num_cols == 0 {
            println!();
        }
    }
    if names.len() % num_cols != 0 {
        println!();
    }
}

/// Resolve a `cd` argument to an absolute target path. `~` goes home, `-`
/// returns to the previous directory, everything else resolves against the
/// current directory. Errors are user-facing messages.
pub fn resolve_cd_target(
    arg: &str,
    previous: Option<&Path>,
    home: Option<&Path>,
    cwd: &Path,
) -> Result<PathBuf, String> {
    let target = match arg {
        "~" => home
            .map(Path::to_path_buf)
            .ok_or_else(|| "Error: home directory not found".to_string())?,
        "-" => previous
            .map(Path::to_path_buf)
            .ok_or_else(|| "Error: no previous directory to return to".to_string())?,
        other => {
            let path = Path::new(other);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            }
        }
    };

    if target.is_dir() {
        Ok(target)
    } else {
        Err(format!(
            "Error: '{}' does not exist or is not a directory",
            arg
        ))
    }
}

/// `cd`: change the process working directory. Returns the directory we
/// left on success so the caller can record it as the previous path.
pub fn change_directory(arg: &str, previous: Option<&Path>) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let target = match resolve_cd_target(arg, previous, dirs::home_dir().as_deref(), &cwd) {
        Ok(target) => target,
        Err(message) => {
            println!("{}", message.red());
            return None;
        }
    };
    match std::env::set_current_dir(&target) {
        Ok(()) => Some(cwd),
        Err(e) => {
            println!("{}", format!("Error changing directory to '{}': {}", arg, e).red());
            None
        }
    }
}

pub fn print_working_dir() {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    println!("{}", cwd.display().to_string().blue());
}

pub fn make_directory(path: &Path) {
    if path.exists() {
        println!(
            "{}",
            format!("Warning: directory '{}' already exists", path.display()).yellow()
        );
        return;
    }
    match fs::create_dir(path) {
        Ok(()) => println!("{}", format!("Directory created: {}", path.display()).green()),
        Err(e) => println!(
            "{}",
            format!("Error creating directory '{}': {}", path.display(), e).red()
        ),
    }
}

pub fn remove_directory(path: &Path) {
    if !path.exists() {
        println!(
            "{}",
            format!("Warning: directory '{}' does not exist", path.display()).yellow()
        );
        return;
    }
    match fs::remove_dir_all(path) {
        Ok(()) => println!("{}", format!("Directory removed: {}", path.display()).green()),
        Err(e) => println!(
            "{}",
            format!("Error removing directory '{}': {}", path.display(), e).red()
        ),
    }
}

pub fn create_file(path: &Path) {
    match fs::File::create(path) {
        Ok(_) => println!("{}", format!("File created: {}", path.display()).green()),
        Err(e) => println!(
            "{}",
            format!("Error: could not create file {}: {}", path.display(), e).red()
        ),
    }
}

pub fn remove_file(path: &Path) {
    if !path.exists() {
        println!(
            "{}",
            format!("Warning: file '{}' does not exist", path.display()).yellow()
        );
        return;
    }
    match fs::remove_file(path) {
        Ok(()) => println!("{}", format!("File removed: {}", path.display()).green()),
        Err(e) => println!(
            "{}",
            format!("Error removing file '{}': {}", path.display(), e).red()
        ),
    }
}

/// `cat`: print a file with dim right-aligned line numbers
pub fn show_file(path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            println!(
                "{}",
                format!("Error: could not read file {}", path.display()).red()
            );
            return;
        }
    };

    let rule = "-".repeat(37);
    println!("{}", format!("Contents of {}:", path.display()).cyan());
    println!("{}", rule.clone().dark_grey());
    for (i, line) in content.lines().enumerate() {
        println!("{}{}", format!("{:>3} | ", i + 1).dark_grey(), line);
    }
    println!("{}", rule.dark_grey());
}

/// Pass a `git ...` line through to the git binary. The interrupt hook is
/// already disarmed during dispatch, so Ctrl+C goes to the child.
pub fn run_git(tokens: &[String]) {
    let status = Command::new("git").args(&tokens[1..]).status();
    if let Err(e) = status {
        println!("{}", format!("Error running git: {}", e).red());
    }
}

/// Fall back to the host shell for anything unrecognized
pub fn run_external(line: &str) {
    let status = Command::new("sh").arg("-c").arg(line).status();
    if let Err(e) = status {
        println!("{}", format!("Error running command '{}': {}", line, e).red());
    }
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(ShellCommand::from_token("ls"), ShellCommand::List);
        assert_eq!(ShellCommand::from_token("dir"), ShellCommand::List);
        assert_eq!(ShellCommand::from_token("cls"), ShellCommand::Clear);
        assert_eq!(ShellCommand::from_token("quit"), ShellCommand::Exit);
        assert_eq!(ShellCommand::from_token("vim"), ShellCommand::External);
    }

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokenize("ls -l src"), vec!["ls", "-l", "src"]);
        assert_eq!(tokenize("  spaced   out  "), vec!["spaced", "out"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize("cat \"my file.txt\""),
            vec!["cat", "my file.txt"]
        );
        assert_eq!(tokenize("touch \"a b\" c"), vec!["touch", "a b", "c"]);
        // Unterminated quote swallows the rest of the line
        assert_eq!(tokenize("rm \"open ended"), vec!["rm", "open ended"]);
    }

    #[test]
    fn test_resolve_cd_target() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        // Relative path resolves against the given cwd
        let resolved = resolve_cd_target("sub", None, None, dir.path()).unwrap();
        assert_eq!(resolved, sub);

        // Absolute path passes through
        let resolved = resolve_cd_target(sub.to_str().unwrap(), None, None, dir.path()).unwrap();
        assert_eq!(resolved, sub);

        // `~` uses the supplied home
        let resolved = resolve_cd_target("~", None, Some(dir.path()), dir.path()).unwrap();
        assert_eq!(resolved, dir.path());

        // `-` with no previous directory is a user error
        assert!(resolve_cd_target("-", None, None, dir.path()).is_err());
        let resolved = resolve_cd_target("-", Some(sub.as_path()), None, dir.path()).unwrap();
        assert_eq!(resolved, sub);

        // Non-directories are rejected
        assert!(resolve_cd_target("missing", None, None, dir.path()).is_err());
    }

    #[test]
    fn test_make_and_remove_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("made");

        make_directory(&target);
        assert!(target.is_dir());

        // Second create warns but leaves the directory in place
        make_directory(&target);
        assert!(target.is_dir());

        fs::write(target.join("inner.txt"), "x").unwrap();
        remove_directory(&target);
        assert!(!target.exists());

        // Removing again is a warning, not a failure
        remove_directory(&target);
    }

    #[test]
    fn test_create_and_remove_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");

        create_file(&file);
        assert!(file.is_file());

        remove_file(&file);
        assert!(!file.exists());
        remove_file(&file);
    }

    #[test]
    fn test_show_file_missing_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        show_file(&dir.path().join("nope.txt"));
    }

    #[test]
    fn test_help_entries_cover_surface() {
        let entries = ShellCommand::help_entries();
        assert_eq!(entries.len(), 13);
        assert!(entries.iter().any(|(usage, _)| usage.starts_with("theme")));
    }
}
