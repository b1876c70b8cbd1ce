//! Domain layer: core entities and business rules.

pub mod composer;
pub mod events;
pub mod message;
pub mod session;
pub mod shell_state;
pub mod transcript;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
