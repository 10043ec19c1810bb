//! Design source handles and their resolution.
//!
//! A [`DesignSource`] is created once, either from a literal path or from the
//! interactive chooser, and then only borrowed by the load pipeline.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::BootError;
use crate::presenter::Presenter;
use crate::types::StartupConfiguration;

/// Extension of the native saved format. Everything else is text interchange.
pub const NATIVE_EXTENSION: &str = "bin";

/// Extensions offered by the interactive chooser.
pub const DESIGN_EXTENSIONS: &[&str] = &["dsn", NATIVE_EXTENSION];

/// A resolved, readable design file.
#[derive(Debug, PartialEq, Eq)]
pub struct DesignSource {
    path: PathBuf,
    display_name: String,
    parent_directory: PathBuf,
    is_text_interchange_format: bool,
}

impl DesignSource {
    /// Resolve `path` to a design. Fails with [`BootError::SourceNotFound`]
    /// unless it names an existing regular file.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, BootError> {
        let path = path.into();
        let is_file = std::fs::metadata(&path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(BootError::SourceNotFound { path: Some(path) });
        }

        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let parent_directory = parent_or_current(&path);
        let is_text_interchange_format = !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(NATIVE_EXTENSION));

        Ok(Self {
            path,
            display_name,
            parent_directory,
            is_text_interchange_format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn parent_directory(&self) -> &Path {
        &self.parent_directory
    }

    pub fn is_text_interchange_format(&self) -> bool {
        self.is_text_interchange_format
    }

    /// Open the design for reading.
    pub fn open_stream(&self) -> Result<BufReader<File>, BootError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|source| BootError::StreamUnavailable {
                path: self.path.clone(),
                source,
            })
    }
}

fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Produce the design source for `config`: the explicit path when one was
/// given, otherwise whatever the user picks in the chooser. Attempted once.
pub fn resolve(
    config: &StartupConfiguration,
    presenter: &mut dyn Presenter,
) -> Result<DesignSource, BootError> {
    if let Some(path) = &config.explicit_design_path {
        tracing::debug!(path = %path.display(), "resolving explicit design path");
        return DesignSource::from_path(path.clone());
    }

    let hint = config.design_directory_hint.as_deref();
    tracing::debug!(hint = ?hint, "opening interactive design chooser");
    let chosen = presenter
        .prompt_for_source(hint)
        .ok_or(BootError::SourceNotFound { path: None })?;
    // A chooser answer that is not a design file counts as no selection.
    DesignSource::from_path(&chosen).map_err(|err| {
        tracing::warn!(path = %chosen.display(), error = %err, "chosen design is not a file");
        BootError::SourceNotFound { path: None }
    })
}

/// Design files in `dir`, sorted by name. Unreadable directories yield none.
pub fn list_design_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| {
            p.extension().is_some_and(|ext| {
                DESIGN_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
        })
        .collect();
    files.sort();
    files
}
