//! # boardroute-load
//!
//! Workspace contract, load pipeline, rules import and lifecycle.
//!
//! [`Bootstrap::run`] drives a whole process run: parse, resolve, load, then
//! wait for the workspace to close. The pieces are usable on their own:
//! [`pipeline::load`] builds a loaded workspace, [`lifecycle::supervise`]
//! turns it into an [`ExitStatus`].

pub mod bootstrap;
pub mod error;
pub mod lifecycle;
pub mod pipeline;
pub mod rules;
pub mod workspace;

pub use bootstrap::{Bootstrap, Phase};
pub use error::RulesImportError;
pub use lifecycle::{supervise, ExitStatus};
pub use rules::RulesImport;
pub use workspace::{
    closed_channel, Abandoned, ClosedNotifier, ClosedSignal, Workspace, WorkspaceFactory,
    WorkspaceSettings,
};
