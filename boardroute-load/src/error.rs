//! Error types for boardroute-load.

use std::path::PathBuf;

use thiserror::Error;

/// Why a companion rules file was not applied. Never fatal.
#[derive(Debug, Error)]
pub enum RulesImportError {
    /// The rules file exists but could not be read.
    #[error("cannot read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not start with a `(rules` form.
    #[error("{path} is not a rules file")]
    NotRulesFile { path: PathBuf },

    /// The workspace refused the rules.
    #[error("workspace rejected rules {path}: {reason}")]
    Rejected { path: PathBuf, reason: String },
}

/// Convenience constructor for [`RulesImportError::Read`].
pub(crate) fn read_err(path: impl Into<PathBuf>, source: std::io::Error) -> RulesImportError {
    RulesImportError::Read {
        path: path.into(),
        source,
    }
}
