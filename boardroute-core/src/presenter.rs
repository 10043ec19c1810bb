//! Presentation capability used by the bootstrap.
//!
//! The terminal binary implements this against stdin/stderr; tests supply
//! scripted fakes so the whole flow runs headless.

use std::path::{Path, PathBuf};

pub trait Presenter {
    /// Ask the user to pick a design, starting in `hint` when given.
    /// `None` means the user cancelled or the chooser failed.
    fn prompt_for_source(&mut self, hint: Option<&Path>) -> Option<PathBuf>;

    /// Show a "please wait" notice until [`Presenter::dismiss_notice`].
    fn show_transient_notice(&mut self, message: &str);

    fn dismiss_notice(&mut self);

    /// Yes/no question. `false` on anything but an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;

    fn report_error(&mut self, message: &str);
}
