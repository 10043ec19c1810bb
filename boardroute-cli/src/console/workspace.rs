//! A terminal stand-in for the interactive board editor.
//!
//! It checks that the design is a plausible board, keeps count of applied
//! rule sets, and closes when the user types `q` (or stdin ends). With
//! auto-save enabled it leaves a session file next to the design on close.

use std::fs;
use std::io::{BufRead, Read};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};

use boardroute_core::{DebugLevel, DesignSource};
use boardroute_load::{
    closed_channel, rules, ClosedNotifier, ClosedSignal, Workspace, WorkspaceFactory,
    WorkspaceSettings,
};

use super::LineInput;

pub const SESSION_EXTENSION: &str = "ses";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub name: String,
    pub bytes: usize,
}

pub struct ConsoleWorkspace {
    display_name: String,
    parent_directory: PathBuf,
    settings: WorkspaceSettings,
    board: Option<Board>,
    rule_sets: usize,
}

pub struct ConsoleWorkspaceFactory;

impl WorkspaceFactory for ConsoleWorkspaceFactory {
    type Workspace = ConsoleWorkspace;

    fn create(&self, source: &DesignSource, settings: WorkspaceSettings) -> ConsoleWorkspace {
        tracing::debug!(design = %source.path().display(), ?settings, "creating console workspace");
        ConsoleWorkspace {
            display_name: source.display_name().to_string(),
            parent_directory: source.parent_directory().to_path_buf(),
            settings,
            board: None,
            rule_sets: 0,
        }
    }
}

impl ConsoleWorkspace {
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn rule_sets(&self) -> usize {
        self.rule_sets
    }

    /// `<parent>/<base>.ses` when auto-save is on.
    fn session_target(&self) -> Option<SessionFile> {
        if !self.settings.auto_save_on_exit {
            return None;
        }
        let base = rules::base_name(&self.display_name).to_string();
        Some(SessionFile {
            path: self
                .parent_directory
                .join(format!("{base}.{SESSION_EXTENSION}")),
            contents: format!(
                "(session {base}\n  (base_design {})\n)\n",
                self.display_name
            ),
        })
    }

    /// Wait for the user on `input`, save the session, then fire `notifier`.
    fn close_when_done(
        mut input: impl LineInput,
        session: Option<SessionFile>,
        notifier: ClosedNotifier,
    ) {
        while let Some(line) = input.next_line() {
            if matches!(line.trim(), "q" | "quit") {
                break;
            }
        }
        if let Some(session) = session {
            match session.write() {
                Ok(()) => tracing::info!(path = %session.path.display(), "session saved"),
                Err(err) => tracing::warn!(error = %format!("{err:#}"), "session save failed"),
            }
        }
        notifier.notify();
    }
}

impl Workspace for ConsoleWorkspace {
    fn load(&mut self, stream: &mut dyn BufRead, is_text_interchange_format: bool) -> bool {
        let mut data = Vec::new();
        if let Err(err) = stream.read_to_end(&mut data) {
            tracing::warn!(error = %err, "design read failed");
            return false;
        }

        let board = if is_text_interchange_format {
            parse_text_design(&String::from_utf8_lossy(&data)).map(|name| Board {
                name: if name.is_empty() {
                    rules::base_name(&self.display_name).to_string()
                } else {
                    name
                },
                bytes: data.len(),
            })
        } else if data.is_empty() {
            None
        } else {
            Some(Board {
                name: rules::base_name(&self.display_name).to_string(),
                bytes: data.len(),
            })
        };

        if self.settings.debug_level == DebugLevel::CriticalDebugOutput {
            tracing::debug!(bytes = data.len(), board = ?board, "design parsed");
        }
        self.board = board;
        self.board.is_some()
    }

    fn apply_rules(&mut self, rules: &str) -> Result<(), String> {
        if !parens_balanced(rules) {
            return Err("unbalanced parentheses".to_string());
        }
        self.rule_sets += 1;
        Ok(())
    }

    fn refresh_views(&mut self) {
        if let Some(board) = &self.board {
            tracing::info!(
                "board {}: {} bytes, {} rule set(s)",
                board.name,
                board.bytes,
                self.rule_sets
            );
        }
    }

    fn on_closed(&mut self) -> ClosedSignal {
        let (notifier, signal) = closed_channel();
        let session = self.session_target();
        tracing::info!("{} open; type q to close", self.display_name);
        thread::spawn(move || Self::close_when_done(std::io::stdin(), session, notifier));
        signal
    }
}

struct SessionFile {
    path: PathBuf,
    contents: String,
}

impl SessionFile {
    fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.contents)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

/// Board name from a `(pcb <name> …)` design, `None` if the text is not one.
fn parse_text_design(text: &str) -> Option<String> {
    let body = text.trim_start();
    let head = body.get(..4)?;
    if !head.eq_ignore_ascii_case("(pcb") {
        return None;
    }
    let rest = &body[4..];
    if !rest.starts_with(|c: char| c.is_whitespace() || c == ')') {
        return None;
    }
    if !parens_balanced(body) {
        return None;
    }
    let name = rest
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_end_matches(')')
        .trim_matches('"');
    Some(name.to_string())
}

/// Parentheses outside double-quoted strings nest and close properly.
fn parens_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    let mut quoted = false;
    for c in text.chars() {
        match c {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0 && !quoted
}
