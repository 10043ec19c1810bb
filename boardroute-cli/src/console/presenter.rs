//! Presenter backed by a line input and a text output (stdin/stderr in the
//! binary).

use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;

use boardroute_core::{source::list_design_files, Catalog, Presenter};

use super::LineInput;

pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    catalog: &'static Catalog,
    notice: Option<String>,
}

impl<R: LineInput, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, catalog: &'static Catalog) -> Self {
        Self {
            input,
            output,
            catalog,
            notice: None,
        }
    }

    // Terminal write failures leave nothing useful to do; the run continues.
    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
        let _ = self.output.flush();
    }
}

impl<R: LineInput, W: Write> Presenter for TerminalPresenter<R, W> {
    fn prompt_for_source(&mut self, hint: Option<&Path>) -> Option<PathBuf> {
        let dir = hint.unwrap_or_else(|| Path::new("."));
        let candidates = list_design_files(dir);

        self.say(self.catalog.choose_design);
        for (i, path) in candidates.iter().enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.say(&format!("  [{}] {name}", i + 1));
        }

        let answer = self.input.next_line()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        if let Ok(index) = answer.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| candidates.get(i))
                .cloned();
        }
        Some(dir.join(answer))
    }

    fn show_transient_notice(&mut self, message: &str) {
        self.say(&format!("{}", message.dimmed()));
        self.notice = Some(message.to_string());
    }

    fn dismiss_notice(&mut self) {
        if let Some(notice) = self.notice.take() {
            tracing::debug!(notice = %notice, "notice dismissed");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.say(&format!("{message} [y/N]"));
        let Some(answer) = self.input.next_line() else {
            return false;
        };
        matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "j" | "ja"
        )
    }

    fn report_error(&mut self, message: &str) {
        self.say(&format!("{} {message}", "error:".red().bold()));
    }
}
