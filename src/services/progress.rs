//! Progress reporting for remote space calls.
//!
//! This is the "call context" handed to the invocation collaborator. The MCP
//! server builds one from the request's progress token; the CLI and tests use
//! the no-op reporter. Reporting must never fail the invocation.

use std::sync::Arc;

use async_trait::async_trait;

/// Receives progress updates while a space call is in flight.
///
/// `current` runs from 0.0 to `total` (normally 1.0).
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// Fire-and-forget progress update.
    async fn report(&self, current: f64, total: f64, message: Option<String>);

    /// Report step `step` of `total_steps`.
    async fn step(&self, step: usize, total_steps: usize, message: &str) {
        let current = if total_steps == 0 {
            1.0
        } else {
            step as f64 / total_steps as f64
        };
        self.report(current, 1.0, Some(message.to_string())).await;
    }
}

/// Reporter that drops every update.
pub struct NoopProgressReporter;

#[async_trait]
impl ProgressReporter for NoopProgressReporter {
    async fn report(&self, _current: f64, _total: f64, _message: Option<String>) {}
}

pub fn noop_progress() -> Arc<dyn ProgressReporter> {
    Arc::new(NoopProgressReporter)
}
