//! Use case layer: application workflows and orchestration.

pub mod alias_check;
pub mod bootstrap;
pub mod check_alias;
pub mod context;
pub mod contracts;
pub mod shorten_link;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
