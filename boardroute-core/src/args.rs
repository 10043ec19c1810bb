//! Startup argument parsing.
//!
//! Flags are matched by prefix, case-sensitively, in a single left-to-right
//! pass:
//!
//! ```text
//! -de <path>   explicit design file
//! -di <dir>    seed directory for the interactive chooser
//! -l  d…       alternate locale
//! -s           save a session file on exit
//! -test        elevated debug output
//! -h, --help   usage only
//! ```
//!
//! Malformed input never fails: a missing or flag-shaped lookahead value is
//! treated as "not provided", unknown tokens are skipped.

use std::path::PathBuf;

use crate::types::{Locale, StartupConfiguration};

/// Result of scanning the startup tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A configuration to bootstrap with.
    Run(StartupConfiguration),
    /// `-h`/`--help` was seen; print [`usage`] and stop.
    Help,
}

/// Scan `tokens` into a [`ParseOutcome`]. Pure: the same tokens always yield
/// the same outcome.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ParseOutcome {
    let mut config = StartupConfiguration::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();
        let next = tokens.get(i + 1).map(AsRef::as_ref);

        if token.starts_with("-de") {
            if let Some(value) = next.filter(|v| !is_flag(v)) {
                config.explicit_design_path = Some(PathBuf::from(value));
                i += 1;
            }
        } else if token.starts_with("-di") {
            if let Some(value) = next.filter(|v| !is_flag(v)) {
                config.design_directory_hint = Some(PathBuf::from(value));
                i += 1;
            }
        } else if token.starts_with("-l") {
            if next.is_some_and(|v| v.starts_with('d')) {
                config.locale = Locale::Alternate;
                i += 1;
            }
        } else if token.starts_with("-s") {
            config.auto_save_on_exit = true;
        } else if token.starts_with("-test") {
            config.debug_mode = true;
        } else if token.starts_with("-h") || token.starts_with("--help") {
            return ParseOutcome::Help;
        }

        i += 1;
    }

    ParseOutcome::Run(config)
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Help text printed for `-h`/`--help`.
pub fn usage() -> String {
    format!(
        "boardroute version {}\n\
         command line options are:\n\
         -de    provide design file\n\
         -di    design folder used in file dialog\n\
         -l     provide locale (d… selects German)\n\
         -s     session file is saved automatically on exit\n\
         -test  test option, elevated debug output\n\
         -h     this help\n",
        env!("CARGO_PKG_VERSION")
    )
}
