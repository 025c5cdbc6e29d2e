//! MCP progress notifications for space invocations.
//!
//! Built from the request's `_meta.progressToken`. Clients that did not ask
//! for progress get the no-op reporter.

use async_trait::async_trait;
use rmcp::model::{Meta, ProgressNotificationParam, ProgressToken};
use rmcp::{Peer, RoleServer};
use std::sync::Arc;
use tracing::debug;

use crate::services::progress::{noop_progress, ProgressReporter};

/// Sends `notifications/progress` to the calling client.
pub struct McpProgressReporter {
    client: Peer<RoleServer>,
    token: ProgressToken,
}

impl McpProgressReporter {
    pub fn new(client: Peer<RoleServer>, token: ProgressToken) -> Self {
        Self { client, token }
    }
}

#[async_trait]
impl ProgressReporter for McpProgressReporter {
    async fn report(&self, current: f64, total: f64, message: Option<String>) {
        let sent = self
            .client
            .notify_progress(ProgressNotificationParam {
                progress_token: self.token.clone(),
                progress: current,
                total: Some(total),
                message,
            })
            .await;
        if let Err(e) = sent {
            debug!(error = %e, "progress notification dropped");
        }
    }
}

/// Reporter for one `tools/call`, falling back to no-op.
pub fn progress_for_request(meta: &Meta, client: &Peer<RoleServer>) -> Arc<dyn ProgressReporter> {
    match meta.get_progress_token() {
        Some(token) => Arc::new(McpProgressReporter::new(client.clone(), token.clone())),
        None => noop_progress(),
    }
}
