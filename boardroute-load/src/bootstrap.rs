//! The per-process bootstrap state machine.
//!
//! ```text
//! Parsing ─┬─ help ──────────────────────────────► Terminated(0)
//!          └► Resolving ─► Loading ─┬► Running ──► Terminated(0 | 1)
//!                  │                └► Failed ───► Terminated(1)
//!                  └───────────────────► Failed
//! ```
//!
//! Every transition is logged at `debug`. Terminated states are final.

use std::io::Write;

use boardroute_core::{args, source, BootError, Catalog, ParseOutcome, Presenter, Settings};

use crate::lifecycle::{self, ExitStatus};
use crate::pipeline;
use crate::workspace::WorkspaceFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parsing,
    Resolving,
    Loading,
    Running,
    Failed,
    Terminated(ExitStatus),
}

pub struct Bootstrap<'a, F: WorkspaceFactory> {
    factory: &'a F,
    presenter: &'a mut dyn Presenter,
    settings: Settings,
    trail: Vec<Phase>,
}

impl<'a, F: WorkspaceFactory> Bootstrap<'a, F> {
    pub fn new(factory: &'a F, presenter: &'a mut dyn Presenter, settings: Settings) -> Self {
        Self {
            factory,
            presenter,
            settings,
            trail: vec![Phase::Parsing],
        }
    }

    /// Phases visited so far, in order.
    pub fn phases(&self) -> &[Phase] {
        &self.trail
    }

    pub fn phase(&self) -> Phase {
        *self.trail.last().unwrap_or(&Phase::Parsing)
    }

    /// Parse `tokens`, resolve and load the design, then block until the
    /// workspace closes. Usage text goes to `out`.
    pub fn run<S: AsRef<str>>(&mut self, tokens: &[S], out: &mut dyn Write) -> ExitStatus {
        let config = match args::parse(tokens) {
            ParseOutcome::Help => {
                if let Err(err) = out.write_all(args::usage().as_bytes()) {
                    tracing::warn!(error = %err, "failed to print usage");
                }
                return self.terminate(ExitStatus::Success);
            }
            ParseOutcome::Run(config) => config.with_settings(&self.settings),
        };
        tracing::debug!(config = ?config, "startup configuration");
        let catalog = Catalog::for_locale(config.locale);

        self.advance(Phase::Resolving);
        let design = match source::resolve(&config, self.presenter) {
            Ok(design) => design,
            Err(err) => return self.fail(err, catalog),
        };

        self.advance(Phase::Loading);
        self.presenter
            .show_transient_notice(&catalog.loading(design.display_name()));
        let loaded = pipeline::load(&design, &config, self.factory, self.presenter);
        self.presenter.dismiss_notice();

        match loaded {
            Ok(workspace) => {
                self.advance(Phase::Running);
                let status = lifecycle::supervise(Ok::<_, BootError>(workspace));
                self.terminate(status)
            }
            Err(err) => self.fail(err, catalog),
        }
    }

    fn fail(&mut self, err: BootError, catalog: &Catalog) -> ExitStatus {
        tracing::debug!(error = %err, "bootstrap failed");
        self.presenter.report_error(&user_message(&err, catalog));
        self.advance(Phase::Failed);
        let status = lifecycle::supervise(Err::<F::Workspace, _>(err));
        self.terminate(status)
    }

    fn terminate(&mut self, status: ExitStatus) -> ExitStatus {
        self.advance(Phase::Terminated(status));
        status
    }

    fn advance(&mut self, next: Phase) {
        tracing::debug!(from = ?self.phase(), to = ?next, "bootstrap phase");
        self.trail.push(next);
    }
}

fn user_message(err: &BootError, catalog: &Catalog) -> String {
    match err {
        BootError::SourceNotFound { path: Some(path) } => {
            catalog.missing(&path.display().to_string())
        }
        BootError::SourceNotFound { path: None } => catalog.nothing_selected.to_string(),
        BootError::StreamUnavailable { path, source } => {
            format!("{} ({source})", catalog.missing(&path.display().to_string()))
        }
        BootError::LoadRejected { name } => catalog.rejected(name),
    }
}
