//! Domain layer: link values, URL syntax rules and workflow states.

pub mod link;
pub mod url_syntax;
pub mod workflow_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
