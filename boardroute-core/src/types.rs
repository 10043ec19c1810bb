//! Domain types shared by every bootstrap stage.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Language used for user-visible messages.
///
/// `Default` is English; `Alternate` is German and is selected on the command
/// line with `-l d…`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    Default,
    #[serde(alias = "de")]
    Alternate,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Default => write!(f, "en"),
            Locale::Alternate => write!(f, "de"),
        }
    }
}

/// Diagnostic verbosity handed to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DebugLevel {
    #[default]
    Release,
    CriticalDebugOutput,
}

impl DebugLevel {
    /// `-test` maps to [`DebugLevel::CriticalDebugOutput`], absence to
    /// [`DebugLevel::Release`].
    pub fn from_debug_mode(debug_mode: bool) -> Self {
        if debug_mode {
            DebugLevel::CriticalDebugOutput
        } else {
            DebugLevel::Release
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            DebugLevel::Release => "info",
            DebugLevel::CriticalDebugOutput => "debug",
        }
    }
}

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Structured form of the startup arguments. Produced once per process.
///
/// Explicit mode is not a separate field: it holds exactly when
/// `explicit_design_path` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartupConfiguration {
    pub explicit_design_path: Option<PathBuf>,
    pub design_directory_hint: Option<PathBuf>,
    pub locale: Locale,
    pub auto_save_on_exit: bool,
    pub debug_mode: bool,
}

impl StartupConfiguration {
    pub fn is_explicit(&self) -> bool {
        self.explicit_design_path.is_some()
    }

    pub fn debug_level(&self) -> DebugLevel {
        DebugLevel::from_debug_mode(self.debug_mode)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
