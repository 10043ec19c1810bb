//! Boardroute core library — startup configuration, design source
//! resolution, presentation capability, messages, errors.
//!
//! - [`args`] — command-line parsing and usage text
//! - [`source`] — [`DesignSource`] and [`source::resolve`]
//! - [`presenter`] — the [`Presenter`] capability
//! - [`messages`] — per-locale [`Catalog`]
//! - [`settings`] — optional `~/.boardroute/settings.yaml`
//! - [`error`] — [`BootError`], [`SettingsError`]

pub mod args;
pub mod error;
pub mod messages;
pub mod presenter;
pub mod settings;
pub mod source;
pub mod types;

pub use args::{parse, usage, ParseOutcome};
pub use error::{BootError, SettingsError};
pub use messages::Catalog;
pub use presenter::Presenter;
pub use settings::Settings;
pub use source::DesignSource;
pub use types::{DebugLevel, Locale, StartupConfiguration};
