//! Deterministic fakes for headless bootstrap tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use boardroute_core::{DesignSource, Presenter};
use boardroute_load::{closed_channel, ClosedSignal, Workspace, WorkspaceFactory, WorkspaceSettings};

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    pub choice: Option<PathBuf>,
    pub confirm_answer: bool,
    pub events: Vec<String>,
}

impl ScriptedPresenter {
    pub fn choosing(path: impl Into<PathBuf>) -> Self {
        Self {
            choice: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.strip_prefix("error: "))
            .collect()
    }

    pub fn saw(&self, prefix: &str) -> bool {
        self.events.iter().any(|e| e.starts_with(prefix))
    }
}

impl Presenter for ScriptedPresenter {
    fn prompt_for_source(&mut self, hint: Option<&Path>) -> Option<PathBuf> {
        self.events.push(format!("prompt: {hint:?}"));
        self.choice.clone()
    }

    fn show_transient_notice(&mut self, message: &str) {
        self.events.push(format!("notice: {message}"));
    }

    fn dismiss_notice(&mut self) {
        self.events.push("dismiss".to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.events.push(format!("confirm: {message}"));
        self.confirm_answer
    }

    fn report_error(&mut self, message: &str) {
        self.events.push(format!("error: {message}"));
    }
}

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Closing {
    #[default]
    Normally,
    Abandoned,
}

#[derive(Debug, Default)]
pub struct Record {
    pub created: Vec<WorkspaceSettings>,
    pub loaded: Vec<(String, bool)>,
    pub rules: Vec<String>,
    pub refreshes: usize,
    pub closed_registrations: usize,
}

#[derive(Debug, Default)]
pub struct FakeFactory {
    pub reject_design: bool,
    pub reject_rules: bool,
    pub closing: Closing,
    pub record: Rc<RefCell<Record>>,
}

pub struct FakeWorkspace {
    reject_design: bool,
    reject_rules: bool,
    closing: Closing,
    record: Rc<RefCell<Record>>,
}

impl WorkspaceFactory for FakeFactory {
    type Workspace = FakeWorkspace;

    fn create(&self, _source: &DesignSource, settings: WorkspaceSettings) -> FakeWorkspace {
        self.record.borrow_mut().created.push(settings);
        FakeWorkspace {
            reject_design: self.reject_design,
            reject_rules: self.reject_rules,
            closing: self.closing,
            record: Rc::clone(&self.record),
        }
    }
}

impl Workspace for FakeWorkspace {
    fn load(&mut self, stream: &mut dyn BufRead, is_text: bool) -> bool {
        let mut contents = String::new();
        if stream.read_to_string(&mut contents).is_err() {
            return false;
        }
        self.record.borrow_mut().loaded.push((contents, is_text));
        !self.reject_design
    }

    fn apply_rules(&mut self, rules: &str) -> Result<(), String> {
        if self.reject_rules {
            return Err("rules do not match the board".to_string());
        }
        self.record.borrow_mut().rules.push(rules.to_string());
        Ok(())
    }

    fn refresh_views(&mut self) {
        self.record.borrow_mut().refreshes += 1;
    }

    fn on_closed(&mut self) -> ClosedSignal {
        self.record.borrow_mut().closed_registrations += 1;
        let (notifier, signal) = closed_channel();
        match self.closing {
            Closing::Normally => notifier.notify(),
            Closing::Abandoned => drop(notifier),
        }
        signal
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const TEXT_DESIGN: &str = "(pcb board\n  (structure)\n)\n";
pub const RULES: &str = "(rules PCB board\n  (rule (width 250))\n)\n";

pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
