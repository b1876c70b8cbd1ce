//! Chat service integration layer: HTTP client and request dispatch.

pub mod client;
pub mod gateway;

pub use client::{ChatService, HttpChatService, ServiceError};
pub use gateway::ThreadedChatGateway;

/// Returns the service module name for smoke checks.
pub fn module_name() -> &'static str {
    "service"
}
