//! Boardroute — board router launcher.
//!
//! # Usage
//!
//! ```text
//! boardroute [-de <design file>] [-di <design directory>] [-l de] [-s] [-test] [-h]
//! ```
//!
//! Without `-de` a chooser lists the designs in the `-di` directory (or the
//! settings' `design_dir`, or the current directory). The process stays up
//! until the workspace is closed and exits 0 on a normal close, 1 otherwise.

mod console;

use std::process::ExitCode;

use boardroute_core::{settings, Catalog, DebugLevel, ParseOutcome, Settings};
use boardroute_load::Bootstrap;

use console::{ConsoleWorkspaceFactory, TerminalPresenter};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    // The presenter and log level need the effective configuration before the
    // bootstrap runs; parsing is pure, so this does not consume anything.
    let preview = match boardroute_core::parse(&tokens) {
        ParseOutcome::Run(config) => Some(config),
        ParseOutcome::Help => None,
    };
    init_tracing(
        preview
            .as_ref()
            .map_or(DebugLevel::Release, |config| config.debug_level()),
    );

    let settings = load_settings();
    let locale = preview
        .map(|config| config.with_settings(&settings).locale)
        .unwrap_or_default();

    let mut presenter = TerminalPresenter::new(
        std::io::stdin(),
        std::io::stderr(),
        Catalog::for_locale(locale),
    );
    let status = Bootstrap::new(&ConsoleWorkspaceFactory, &mut presenter, settings)
        .run(&tokens, &mut std::io::stdout());

    tracing::debug!(code = status.code(), "exiting");
    status.into()
}

// ---------------------------------------------------------------------------
// Ambient setup
// ---------------------------------------------------------------------------

/// `RUST_LOG` wins; otherwise the level follows `-test`.
fn init_tracing(level: DebugLevel) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_settings() -> Settings {
    match settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring settings");
            Settings::default()
        }
    }
}
