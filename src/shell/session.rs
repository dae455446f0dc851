//! Shell Session Module
//!
//! The outer read-eval loop. One `Shell` owns the session state: active
//! theme, history, user/host identity and the previous directory for
//! `cd -`. Each iteration composes a fresh prompt, arms the interrupt hook,
//! reads one line through the editor, then dispatches with the hook
//! disarmed so a Ctrl+C during a subprocess belongs to the subprocess.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::style::Stylize;
use inquire::{InquireError, Select};

use super::commands::{self, ShellCommand};
use super::config::ShellConfig;
use super::editor::{self, ReadOutcome};
use super::history::History;
use super::interrupt;
use super::prompt::{self, Theme, ThemeRegistry};
use super::render;

/// Interactive shell session
pub struct Shell {
    config: ShellConfig,
    registry: ThemeRegistry,
    theme_id: String,
    theme: Theme,
    history: History,
    user: String,
    host: String,
    previous_path: Option<PathBuf>,
    should_exit: bool,
}

impl Shell {
    /// Build a session and install the process-wide interrupt handler.
    /// This is the only construction that may fail fatally.
    pub fn new() -> io::Result<Self> {
        interrupt::install()?;

        let config = ShellConfig::from_env();
        let registry = ThemeRegistry::new();
        let theme_id = if registry.contains(&config.theme) {
            config.theme.clone()
        } else {
            "default".to_string()
        };
        let theme = registry
            .get(&theme_id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "theme registry is empty"))?;

        Ok(Self {
            config,
            registry,
            theme_id,
            theme,
            history: History::new(),
            user: detect_user(),
            host: detect_host(),
            previous_path: None,
            should_exit: false,
        })
    }

    /// Run the read-eval loop until `exit`/`quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        while !self.should_exit {
            let prompt_text = self.compose_prompt();
            interrupt::arm(self.prompt_hook());
            render::print_prompt(&prompt_text)?;

            let outcome = editor::read_line(&prompt_text, &mut self.history);
            interrupt::disarm();

            match outcome? {
                ReadOutcome::Eof => {
                    self.farewell();
                    break;
                }
                ReadOutcome::Line(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    self.history.push(&line);

                    let tokens = commands::tokenize(&line);
                    if tokens.is_empty() {
                        continue;
                    }
                    if matches!(ShellCommand::from_token(&tokens[0]), ShellCommand::Exit) {
                        self.farewell();
                        break;
                    }
                    self.dispatch(&tokens, &line);
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, tokens: &[String], line: &str) {
        match ShellCommand::from_token(&tokens[0]) {
            ShellCommand::Help => commands::show_help(),
            ShellCommand::List => commands::list_directory(&tokens[1..]),
            ShellCommand::ChangeDir => {
                let target = tokens.get(1).map(String::as_str).unwrap_or("~");
                if let Some(left) = commands::change_directory(target, self.previous_path.as_deref())
                {
                    self.previous_path = Some(left);
                }
            }
            ShellCommand::PrintWorkingDir => commands::print_working_dir(),
            ShellCommand::MakeDir => self.with_arg(tokens, "directory", commands::make_directory),
            ShellCommand::RemoveDir => self.with_arg(tokens, "directory", commands::remove_directory),
            ShellCommand::Touch => self.with_arg(tokens, "file", commands::create_file),
            ShellCommand::Remove => self.with_arg(tokens, "file", commands::remove_file),
            ShellCommand::Cat => self.with_arg(tokens, "file", commands::show_file),
            ShellCommand::Clear => {
                let _ = render::clear_screen();
            }
            ShellCommand::Git => commands::run_git(tokens),
            ShellCommand::Theme => self.handle_theme(tokens.get(1).map(String::as_str)),
            ShellCommand::Exit => {}
            ShellCommand::External => commands::run_external(line),
        }
    }

    fn with_arg(&self, tokens: &[String], kind: &str, op: fn(&Path)) {
        match tokens.get(1) {
            Some(name) => op(Path::new(name)),
            None => println!("{}", format!("Error: specify the {} name", kind).red()),
        }
    }

    /// `theme <name>` switches directly; bare `theme` opens a picker
    fn handle_theme(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                if self.set_theme(name) {
                    println!("{}", format!("Theme changed to: {}", name).green());
                } else {
                    println!("{}", format!("Error: theme '{}' does not exist", name).red());
                }
            }
            None => {
                let names: Vec<&str> = self.registry.names();
                let picked = Select::new("Select theme:", names)
                    .with_help_message("Arrows to navigate, Enter to select, Esc to cancel")
                    .prompt();
                match picked {
                    Ok(name) => {
                        self.set_theme(name);
                        println!("{}", format!("Theme changed to: {}", name).green());
                    }
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => println!("{}", format!("Theme selection error: {}", e).red()),
                }
            }
        }
    }

    fn set_theme(&mut self, name: &str) -> bool {
        match self.registry.get(name) {
            Some(theme) => {
                self.theme = theme;
                self.theme_id = name.to_string();
                true
            }
            None => false,
        }
    }

    fn compose_prompt(&self) -> String {
        prompt::compose_prompt(&self.theme, &self.user, &self.host, self.config.show_git_branch)
    }

    /// Hook captured by the interrupt handler: identity and theme are
    /// cloned in, path and branch are recomputed fresh on every fire.
    fn prompt_hook(&self) -> interrupt::PromptHook {
        let theme = self.theme;
        let user = self.user.clone();
        let host = self.host.clone();
        let show_branch = self.config.show_git_branch;
        Arc::new(move || prompt::compose_prompt(&theme, &user, &host, show_branch))
    }

    fn farewell(&mut self) {
        self.should_exit = true;
        println!("{}", "Goodbye!".cyan());
    }

    /// Active theme name, mainly for inspection
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

fn detect_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

fn detect_host() -> String {
    if let Ok(host) = std::env::var("HOSTNAME") {
        if !host.is_empty() {
            return host;
        }
    }
    fs::read_to_string("/etc/hostname")
        .ok()
        .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
