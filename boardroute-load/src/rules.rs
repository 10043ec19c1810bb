//! Best-effort import of a design's companion rules file.
//!
//! Text interchange designs carry no rules of their own. When a rules file
//! saved earlier for the same board sits next to the design, the user is
//! offered to apply it. Whatever happens here, the load continues.

use std::path::{Path, PathBuf};

use boardroute_core::Presenter;

use crate::error::{read_err, RulesImportError};
use crate::workspace::Workspace;

pub const RULES_EXTENSION: &str = "rules";

/// Outcome of [`import_rules`]. Callers may inspect or drop it.
#[derive(Debug)]
pub enum RulesImport {
    Imported(PathBuf),
    /// No rules file at this path.
    Absent(PathBuf),
    /// The user declined the confirmation prompt.
    Declined(PathBuf),
    Failed(RulesImportError),
}

impl RulesImport {
    pub fn is_imported(&self) -> bool {
        matches!(self, RulesImport::Imported(_))
    }
}

/// The display name up to its first `.`.
///
/// `board.dsn` and `board.v2.dsn` both give `board`; `.hidden` gives an empty name.
pub fn base_name(display_name: &str) -> &str {
    display_name.split('.').next().unwrap_or(display_name)
}

/// `<parent>/<base>.rules`. Pure, no I/O.
pub fn rules_path(base_name: &str, parent: &Path) -> PathBuf {
    parent.join(format!("{base_name}.{RULES_EXTENSION}"))
}

/// Look for `<parent>/<base>.rules`, confirm with the user and apply it.
pub fn import_rules(
    base_name: &str,
    parent: &Path,
    workspace: &mut dyn Workspace,
    presenter: &mut dyn Presenter,
    confirmation_prompt: &str,
) -> RulesImport {
    let path = rules_path(base_name, parent);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no companion rules file");
        return RulesImport::Absent(path);
    }

    if !presenter.confirm(confirmation_prompt) {
        tracing::info!(path = %path.display(), "rules import declined");
        return RulesImport::Declined(path);
    }

    match apply(&path, workspace) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "imported rules");
            RulesImport::Imported(path)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rules import failed");
            RulesImport::Failed(err)
        }
    }
}

fn apply(path: &Path, workspace: &mut dyn Workspace) -> Result<(), RulesImportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| read_err(path, e))?;
    if !contents.trim_start().starts_with("(rules") {
        return Err(RulesImportError::NotRulesFile {
            path: path.to_path_buf(),
        });
    }
    workspace
        .apply_rules(&contents)
        .map_err(|reason| RulesImportError::Rejected {
            path: path.to_path_buf(),
            reason,
        })
}
