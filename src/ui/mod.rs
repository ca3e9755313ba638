//! UI layer: terminal implementation of the host prompt surface.

mod terminal;

pub use terminal::TerminalUi;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
