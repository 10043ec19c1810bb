//! Error types for boardroute-core.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal bootstrap failures. Every variant ends the process with status 1.
#[derive(Debug, Error)]
pub enum BootError {
    /// The explicit path did not name a readable design, or the interactive
    /// chooser was cancelled (`path` is `None`).
    #[error("{}", describe_missing(.path))]
    SourceNotFound { path: Option<PathBuf> },

    /// The design was resolved but could not be opened for reading.
    #[error("cannot open design {path}: {source}")]
    StreamUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workspace refused the design data.
    #[error("workspace rejected design '{name}'")]
    LoadRejected { name: String },
}

fn describe_missing(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("design source not found: {}", path.display()),
        None => "no design source selected".to_string(),
    }
}

/// Errors from the optional settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying I/O failure while reading the settings file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with the offending file.
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
