//! Contract for the interactive workspace the bootstrap hands off to.
//!
//! The workspace itself (design parsing, routing, rendering) lives outside
//! this crate. The bootstrap only creates one, feeds it the design, offers it
//! a rules file and waits for it to close.

use std::io::BufRead;

use tokio::sync::oneshot;

use boardroute_core::{DebugLevel, DesignSource, Locale};

/// Construction parameters for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceSettings {
    pub auto_save_on_exit: bool,
    pub debug_level: DebugLevel,
    pub locale: Locale,
}

pub trait Workspace {
    /// Read the design. `false` means the data was rejected.
    fn load(&mut self, stream: &mut dyn BufRead, is_text_interchange_format: bool) -> bool;

    /// Apply the contents of a rules file. `Err` carries the rejection reason.
    fn apply_rules(&mut self, rules: &str) -> Result<(), String>;

    /// Redraw everything that depends on the loaded design.
    fn refresh_views(&mut self);

    /// Register for the closure notification. Called once.
    fn on_closed(&mut self) -> ClosedSignal;
}

pub trait WorkspaceFactory {
    type Workspace: Workspace;

    fn create(&self, source: &DesignSource, settings: WorkspaceSettings) -> Self::Workspace;
}

// ---------------------------------------------------------------------------
// Closed signal
// ---------------------------------------------------------------------------

/// Fired by the workspace when it closes.
#[derive(Debug)]
pub struct ClosedNotifier(oneshot::Sender<()>);

/// Waited on by the lifecycle manager.
#[derive(Debug)]
pub struct ClosedSignal(oneshot::Receiver<()>);

/// The notifier was dropped without firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abandoned;

/// A single-fire closure channel.
pub fn closed_channel() -> (ClosedNotifier, ClosedSignal) {
    let (tx, rx) = oneshot::channel();
    (ClosedNotifier(tx), ClosedSignal(rx))
}

impl ClosedNotifier {
    pub fn notify(self) {
        // Receiver gone means nobody is waiting any more.
        let _ = self.0.send(());
    }
}

impl ClosedSignal {
    /// Block the calling thread until the workspace closes.
    ///
    /// Must not be called from inside an async runtime.
    pub fn wait(self) -> Result<(), Abandoned> {
        self.0.blocking_recv().map_err(|_| Abandoned)
    }
}
