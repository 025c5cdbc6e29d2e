//! MCP client sessions to remote Gradio spaces.
//!
//! A session is opened per call over rmcp's streamable-HTTP client transport
//! and cancelled when the call is done. The first tool of each space is
//! cached so `view_parameters` and `invoke` do not re-list tools every time.

use moka::future::Cache;
use rmcp::model::{CallToolRequestParams, CallToolResult, ClientInfo, Tool};
use rmcp::service::RunningService;
use rmcp::transport::streamable_http_client::StreamableHttpClientTransportConfig;
use rmcp::transport::StreamableHttpClientTransport;
use rmcp::{serve_client, RoleClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::services::hub::HubClient;
use crate::utils::params::JsonObject;
use crate::SpaceError;

const TOOL_CACHE_CAPACITY: u64 = 256;

/// Opens MCP sessions to spaces and remembers their first tool.
pub struct SpaceConnector {
    hub: Arc<HubClient>,
    tools: Cache<String, Tool>,
    call_timeout: Duration,
}

impl SpaceConnector {
    pub fn new(hub: Arc<HubClient>, cache_ttl: Duration, call_timeout: Duration) -> Self {
        let tools = Cache::builder()
            .max_capacity(TOOL_CACHE_CAPACITY)
            .time_to_live(cache_ttl)
            .build();
        Self {
            hub,
            tools,
            call_timeout,
        }
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Resolve the space's MCP endpoint and complete the MCP handshake.
    pub async fn connect(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<SpaceSession, SpaceError> {
        let info = self.hub.space_info(space_name, token).await?;
        let endpoint = info.mcp_endpoint()?;
        debug!(space = space_name, %endpoint, stage = ?info.stage(), "connecting to space");

        let mut config = StreamableHttpClientTransportConfig::with_uri(endpoint.as_str());
        if let Some(token) = token {
            config = config.auth_header(token.to_string());
        }
        let transport = StreamableHttpClientTransport::from_config(config);

        let service = tokio::time::timeout(
            self.call_timeout,
            serve_client(client_info(), transport),
        )
        .await
        .map_err(|_| SpaceError::Timeout {
            operation: format!("Connecting to {}", space_name),
            seconds: self.call_timeout.as_secs(),
        })?
        .map_err(|e| SpaceError::Connection {
            space: space_name.to_string(),
            message: e.to_string(),
        })?;

        info!(space = space_name, "connected to space");
        Ok(SpaceSession {
            space: space_name.to_string(),
            service,
        })
    }

    /// Cached first tool, if any.
    pub async fn cached_tool(&self, space_name: &str) -> Option<Tool> {
        self.tools.get(&cache_key(space_name)).await
    }

    pub async fn remember_tool(&self, space_name: &str, tool: Tool) {
        self.tools.insert(cache_key(space_name), tool).await;
    }

    /// First tool of a space, from cache or a short-lived session.
    pub async fn first_tool(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<Tool, SpaceError> {
        if let Some(tool) = self.cached_tool(space_name).await {
            debug!(space = space_name, "tool schema cache hit");
            return Ok(tool);
        }

        let session = self.connect(space_name, token).await?;
        let listed = session.first_tool().await;
        session.close().await;

        let tool = listed?;
        self.remember_tool(space_name, tool.clone()).await;
        Ok(tool)
    }
}

/// A live MCP session with one space.
pub struct SpaceSession {
    space: String,
    service: RunningService<RoleClient, ClientInfo>,
}

impl SpaceSession {
    pub async fn list_tools(&self) -> Result<Vec<Tool>, SpaceError> {
        self.service
            .peer()
            .list_all_tools()
            .await
            .map_err(|e| SpaceError::Connection {
                space: self.space.clone(),
                message: format!("failed to list tools: {}", e),
            })
    }

    /// The tool a space exposes first; spaces are invoked through it.
    pub async fn first_tool(&self) -> Result<Tool, SpaceError> {
        self.list_tools().await?.into_iter().next().ok_or_else(|| {
            SpaceError::Schema(format!("space '{}' exposes no MCP tools", self.space))
        })
    }

    pub async fn call_tool(
        &self,
        tool_name: &str,
        arguments: JsonObject,
        timeout: Duration,
    ) -> Result<CallToolResult, SpaceError> {
        let name: std::borrow::Cow<'static, str> = tool_name.to_string().into();
        let call = self.service.peer().call_tool(CallToolRequestParams {
            meta: None,
            name,
            arguments: Some(arguments),
            task: None,
        });

        tokio::time::timeout(timeout, call)
            .await
            .map_err(|_| SpaceError::Timeout {
                operation: format!("Invoking {}", self.space),
                seconds: timeout.as_secs(),
            })?
            .map_err(|e| SpaceError::ToolCall {
                space: self.space.clone(),
                message: e.to_string(),
            })
    }

    /// Shut the session down. Errors while closing are only logged.
    pub async fn close(self) {
        if let Err(e) = self.service.cancel().await {
            debug!(space = %self.space, error = %e, "error closing space session");
        }
    }
}

fn cache_key(space_name: &str) -> String {
    space_name.trim().to_ascii_lowercase()
}

fn client_info() -> ClientInfo {
    ClientInfo {
        meta: None,
        protocol_version: Default::default(),
        capabilities: Default::default(),
        client_info: rmcp::model::Implementation {
            name: "dynaspace".into(),
            title: Some("dynaspace space client".into()),
            version: env!("CARGO_PKG_VERSION").into(),
            icons: None,
            website_url: None,
        },
    }
}
