//! Terminal implementations of the presenter and workspace collaborators.

pub mod presenter;
pub mod workspace;

use std::io::{BufRead, Cursor};

pub use presenter::TerminalPresenter;
pub use workspace::{ConsoleWorkspace, ConsoleWorkspaceFactory};

/// Line-at-a-time input.
///
/// Implemented for `Stdin` without holding its lock between lines, so the
/// presenter and the workspace's closing thread can share it.
pub trait LineInput {
    /// Next line without its terminator. `None` at EOF or on read error.
    fn next_line(&mut self) -> Option<String>;
}

impl LineInput for std::io::Stdin {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(trim_newline(line)),
        }
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(trim_newline(line)),
        }
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
