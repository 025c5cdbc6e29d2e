//! Shared initialization logic for MCP and CLI modes.

use anyhow::Result;
use std::sync::Arc;

use crate::config::SpaceSettings;
use crate::mcp::tools::space::{Mode, SpaceRouter, SpaceServices};
use crate::services::{
    CsvDiscoveryService, HubClient, HubSearchService, McpInvokeService, McpSchemaService,
    SpaceConnector,
};

/// Application context holding the settings, clients and router.
///
/// Shared between MCP server and CLI commands.
pub struct AppContext {
    pub settings: SpaceSettings,
    pub hub: Arc<HubClient>,
    pub connector: Arc<SpaceConnector>,
    pub discovery: Arc<CsvDiscoveryService>,
    pub router: SpaceRouter,
}

impl AppContext {
    /// Build every collaborator from resolved settings. No network I/O
    /// happens here.
    pub fn new(settings: SpaceSettings) -> Result<Self> {
        let hub = Arc::new(HubClient::new(
            settings.hub_url.clone(),
            settings.http_timeout,
        )?);
        tracing::debug!("Hub client ready: {}", hub.base_url());

        let connector = Arc::new(SpaceConnector::new(
            hub.clone(),
            settings.schema_cache_ttl,
            settings.invoke_timeout,
        ));
        let discovery = Arc::new(CsvDiscoveryService::new(hub.clone()));

        let services = SpaceServices {
            search: Arc::new(HubSearchService::new(hub.clone())),
            discovery: discovery.clone(),
            schema: Arc::new(McpSchemaService::new(connector.clone())),
            invoke: Arc::new(McpInvokeService::new(connector.clone())),
        };

        let router = SpaceRouter::new(
            settings.data_source.clone(),
            settings.hf_token.clone(),
            services,
        );
        tracing::info!("Mode: {}", router.mode().name());
        if settings.hf_token.is_none() {
            tracing::debug!("No HF token configured; private spaces will be unavailable");
        }

        Ok(Self {
            settings,
            hub,
            connector,
            discovery,
            router,
        })
    }

    pub fn mode(&self) -> Mode {
        self.router.mode()
    }
}
