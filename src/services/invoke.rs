//! `invoke` collaborator: call a space's first tool with coerced arguments.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{InvokeOutput, SpaceResult};
use crate::services::progress::ProgressReporter;
use crate::services::remote::SpaceConnector;
use crate::utils::params::{coerce_parameters, parse_parameters};
use crate::SpaceError;

/// Progress stages of one invocation, reported in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvokeStage {
    Connecting,
    Preparing,
    Running,
    Done,
}

impl InvokeStage {
    const ALL: [InvokeStage; 4] = [
        InvokeStage::Connecting,
        InvokeStage::Preparing,
        InvokeStage::Running,
        InvokeStage::Done,
    ];

    fn number(self) -> usize {
        self as usize + 1
    }

    async fn report(self, progress: &dyn ProgressReporter, message: &str) {
        progress
            .step(self.number(), InvokeStage::ALL.len(), message)
            .await;
    }
}

/// Runs a space with caller-supplied parameters.
#[async_trait]
pub trait SpaceInvokeService: Send + Sync {
    /// `parameters` is the raw JSON object string from the request. The
    /// result is normally a pass-through of the remote content.
    async fn invoke_space(
        &self,
        space_name: &str,
        parameters: &str,
        token: Option<&str>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<SpaceResult, SpaceError>;
}

/// Invokes spaces over their MCP endpoint.
pub struct McpInvokeService {
    connector: Arc<SpaceConnector>,
}

impl McpInvokeService {
    pub fn new(connector: Arc<SpaceConnector>) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl SpaceInvokeService for McpInvokeService {
    async fn invoke_space(
        &self,
        space_name: &str,
        parameters: &str,
        token: Option<&str>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<SpaceResult, SpaceError> {
        // Reject bad JSON before touching the network.
        let arguments = parse_parameters(parameters)?;

        InvokeStage::Connecting
            .report(progress.as_ref(), &format!("Connecting to {}", space_name))
            .await;
        let session = self.connector.connect(space_name, token).await?;

        let tool = match self.connector.cached_tool(space_name).await {
            Some(tool) => tool,
            None => match session.first_tool().await {
                Ok(tool) => {
                    self.connector.remember_tool(space_name, tool.clone()).await;
                    tool
                }
                Err(e) => {
                    session.close().await;
                    return Err(e);
                }
            },
        };

        InvokeStage::Preparing
            .report(progress.as_ref(), &format!("Preparing parameters for {}", tool.name))
            .await;
        let coerced = match coerce_parameters(arguments, tool.input_schema.as_ref()) {
            Ok(coerced) => coerced,
            Err(e) => {
                session.close().await;
                return Err(e);
            }
        };
        if !coerced.warnings.is_empty() {
            debug!(space = space_name, warnings = ?coerced.warnings, "parameter warnings");
        }

        InvokeStage::Running
            .report(progress.as_ref(), &format!("Running {}", tool.name))
            .await;
        let result = session
            .call_tool(&tool.name, coerced.arguments, self.connector.call_timeout())
            .await;
        session.close().await;
        let result = result?;

        InvokeStage::Done.report(progress.as_ref(), "Done").await;
        info!(
            space = space_name,
            tool = %tool.name,
            items = result.content.len(),
            is_error = result.is_error.unwrap_or(false),
            "space invoked"
        );

        Ok(InvokeOutput::from_remote(result, coerced.warnings).into())
    }
}
