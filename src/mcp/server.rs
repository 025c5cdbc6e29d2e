use rmcp::{
    model::*, service::RequestContext, ErrorData as McpError, RoleServer, ServerHandler,
    ServiceExt,
};
use std::sync::Arc;
use tracing::instrument;

use crate::mcp::progress::progress_for_request;
use crate::mcp::tools::space::{Mode, SpaceRouter};
use crate::mcp::types::{space_input_schema, SpaceArgs, TOOL_NAME, TOOL_TITLE};
use crate::models::SpaceResult;
use crate::services::ProgressReporter;
use crate::utils::params::JsonObject;

/// MCP server exposing the `dynamic_space` tool.
///
/// Tools are registered by hand rather than through the tool macros because
/// both the description and the `operation` enum depend on the mode.
#[derive(Clone)]
pub struct SpaceServer {
    router: Arc<SpaceRouter>,
}

impl SpaceServer {
    pub fn new(router: SpaceRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn from_context(ctx: &crate::init::AppContext) -> Self {
        Self::new(ctx.router.clone())
    }

    pub fn mode(&self) -> Mode {
        self.router.mode()
    }

    pub fn router(&self) -> &SpaceRouter {
        &self.router
    }

    /// Tool definition advertised in `tools/list`.
    pub fn tool_definition(&self) -> Tool {
        let mode = self.router.mode();
        let mut tool = Tool::new(
            TOOL_NAME,
            mode.tool_description(),
            space_input_schema(mode),
        );
        tool.title = Some(TOOL_TITLE.to_string());

        let mut annotations = ToolAnnotations::default();
        annotations.title = Some(TOOL_TITLE.to_string());
        annotations.read_only_hint = Some(false);
        annotations.open_world_hint = Some(true);
        tool.annotations = Some(annotations);
        tool
    }

    /// Handle a `tools/call` without the transport. Undecodable arguments
    /// become an error summary; only an unknown tool name is a protocol error.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<CallToolResult, McpError> {
        if name != TOOL_NAME {
            return Err(McpError::invalid_params(
                format!("Unknown tool: {}", name),
                None,
            ));
        }

        let result = match SpaceArgs::from_arguments(arguments) {
            Ok(args) => self.router.execute(args, progress).await,
            Err(e) => SpaceResult::error(format!("Invalid arguments for {}: {}", TOOL_NAME, e)),
        };
        Ok(result.into())
    }

    #[instrument(name = "mcp.dynamic_space", skip_all, fields(tool = %request.name))]
    async fn run_tool_call(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let progress = progress_for_request(&context.meta, &context.peer);
        self.call(&request.name, request.arguments, progress).await
    }
}

impl ServerHandler for SpaceServer {
    fn get_info(&self) -> ServerInfo {
        let mode = self.router.mode();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dynaspace".to_string(),
                title: Some("Dynamic Gradio Spaces".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "One tool, `{}`, running in {} mode. {}",
                TOOL_NAME,
                mode.name(),
                mode.tool_description()
            )),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            tools: vec![self.tool_definition()],
            next_cursor: None,
            meta: None,
        }))
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.run_tool_call(request, context).await }
    }
}

/// Serve the tool over stdio until the client disconnects or Ctrl-C.
pub async fn run_mcp_server(ctx: crate::init::AppContext) -> anyhow::Result<()> {
    let server = SpaceServer::from_context(&ctx);

    tracing::info!(
        "Starting dynaspace MCP server v{} ({} mode)",
        env!("CARGO_PKG_VERSION"),
        server.mode().name()
    );
    if let Some(source) = server.router().data_source() {
        tracing::info!("Discovery data source: {}", source);
    }

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;
    tracing::info!("MCP server listening on stdio");

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            cancel.cancel();
        }
    });

    service.waiting().await?;
    tracing::info!("MCP server shutting down");
    Ok(())
}
