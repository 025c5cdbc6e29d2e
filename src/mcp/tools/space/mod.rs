//! The `dynamic_space` tool: mode-aware operation router.
//!
//! Every call ends in a [`SpaceResult`]. Illegal operations, missing fields
//! and collaborator failures all come back as error summaries; the router
//! itself never fails.

mod mode;
mod space_discover;
mod space_find;
mod space_invoke;
mod space_params;
pub mod usage;

pub use mode::{Mode, Operation, DISCOVER_OPERATIONS, STANDARD_OPERATIONS};

use std::sync::Arc;
use tracing::{debug, warn};

use crate::mcp::SpaceArgs;
use crate::models::{SpaceResult, ToolSummary};
use crate::services::{
    ProgressReporter, SpaceDiscoveryService, SpaceInvokeService, SpaceSchemaService,
    SpaceSearchService,
};
use crate::SpaceError;

/// Collaborators the handlers delegate to.
#[derive(Clone)]
pub struct SpaceServices {
    pub search: Arc<dyn SpaceSearchService + Send + Sync>,
    pub discovery: Arc<dyn SpaceDiscoveryService + Send + Sync>,
    pub schema: Arc<dyn SpaceSchemaService + Send + Sync>,
    pub invoke: Arc<dyn SpaceInvokeService + Send + Sync>,
}

/// Routes `dynamic_space` requests to their handlers.
#[derive(Clone)]
pub struct SpaceRouter {
    mode: Mode,
    data_source: Option<String>,
    hf_token: Option<String>,
    pub(crate) services: SpaceServices,
}

impl SpaceRouter {
    /// The mode follows `data_source`: present and non-blank means Discover.
    pub fn new(
        data_source: Option<String>,
        hf_token: Option<String>,
        services: SpaceServices,
    ) -> Self {
        let data_source = data_source.filter(|s| !s.trim().is_empty());
        Self {
            mode: Mode::from_data_source(data_source.as_deref()),
            data_source,
            hf_token,
            services,
        }
    }

    /// Router with an explicit mode. The data source may disagree with the
    /// mode; `discover` then reports the missing configuration.
    pub fn with_mode(
        mode: Mode,
        data_source: Option<String>,
        hf_token: Option<String>,
        services: SpaceServices,
    ) -> Self {
        Self {
            mode,
            data_source: data_source.filter(|s| !s.trim().is_empty()),
            hf_token,
            services,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_discover_mode(&self) -> bool {
        self.mode.is_discover()
    }

    pub fn data_source(&self) -> Option<&str> {
        self.data_source.as_deref()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.hf_token.as_deref()
    }

    /// Run one request.
    pub async fn execute(
        &self,
        args: SpaceArgs,
        progress: Arc<dyn ProgressReporter>,
    ) -> SpaceResult {
        let requested = match args.requested_operation() {
            Some(op) => op.to_string(),
            None => return SpaceResult::Summary(self.usage()),
        };

        let op = match Operation::parse(&requested) {
            Some(op) => op,
            None => return SpaceResult::error(self.unknown_operation(&requested)),
        };

        if let Some(instead) = self.mode.redirect(op) {
            return SpaceResult::error(format!(
                "The \"{}\" operation is not available in this mode. Use \"{}\" instead.",
                op, instead
            ));
        }

        if self.mode.allows(&requested).is_none() {
            return SpaceResult::error(self.unknown_operation(&requested));
        }

        debug!(operation = %op, mode = self.mode.name(), "dispatching space operation");

        let outcome = match op {
            Operation::Find => self.handle_find(&args).await,
            Operation::Discover => self.handle_discover().await,
            Operation::ViewParameters => self.handle_view_parameters(&args).await,
            Operation::Invoke => self.handle_invoke(&args, progress).await,
        };

        outcome.unwrap_or_else(|e| {
            warn!(operation = %requested, error = %e, "space operation failed");
            SpaceResult::error(execution_error(&requested, &e))
        })
    }

    fn usage(&self) -> ToolSummary {
        ToolSummary::new(self.mode.usage(), 1, 1)
    }

    fn unknown_operation(&self, requested: &str) -> String {
        let mut message = format!(
            "Unknown operation: \"{}\"\nAvailable operations: {}\n",
            requested,
            self.mode.operation_names().join(", ")
        );
        if let Some(suggestion) = self.mode.suggest(requested) {
            message.push_str(&format!("Did you mean \"{}\"?\n", suggestion));
        }
        message.push_str("\nCall this tool with no operation for full usage instructions.");
        message
    }
}

/// Message for a handler failure, naming the operation as the caller wrote it.
pub fn execution_error(operation: &str, error: &SpaceError) -> String {
    format!("Error executing {}: {}", operation, error)
}
