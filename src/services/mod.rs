//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background worker that runs backend requests
//! - input: Event sources feeding the run loop

pub mod api;
pub mod input;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse, HealthPurpose};
pub use input::{EventSource, ScriptedEvents, TerminalEvents};
