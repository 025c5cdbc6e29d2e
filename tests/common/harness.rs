//! Stub collaborators and router builders.
//!
//! `StubSpaces` implements every service trait, records each call, and can be
//! switched to fail so error wrapping can be observed.

use async_trait::async_trait;
use rmcp::model::Content;
use std::sync::{Arc, Mutex};

use dynaspace::mcp::tools::space::{Mode, SpaceRouter, SpaceServices};
use dynaspace::mcp::SpaceServer;
use dynaspace::models::{InvokeOutput, SpaceResult, ToolSummary};
use dynaspace::services::discover::{parse_space_list, render_space_list};
use dynaspace::services::{
    ProgressReporter, SpaceDiscoveryService, SpaceInvokeService, SpaceSchemaService,
    SpaceSearchService,
};
use dynaspace::utils::params::parse_parameters;
use dynaspace::SpaceError;

/// Sample curated list with a quoted description.
pub const SAMPLE_CSV: &str =
    "spaceA/model1,vision,\"A, \"\"quoted\"\" desc\"\nspaceA/model2,text,Simple desc";

pub const TEST_TOKEN: &str = "hf_test_token";

/// Recording stand-in for all four collaborators.
#[derive(Default)]
pub struct StubSpaces {
    /// When set, every collaborator fails with this message.
    pub fail_with: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubSpaces {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, space: &str) -> Result<(), SpaceError> {
        match &self.fail_with {
            Some(message) => Err(SpaceError::Connection {
                space: space.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SpaceSearchService for StubSpaces {
    async fn find_spaces(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError> {
        self.record(format!("find:{:?}:{:?}:{:?}", query, limit, token));
        self.check("hub")?;
        Ok(ToolSummary::new(
            format!("results for {}", query.unwrap_or("<none>")),
            3,
            2,
        ))
    }
}

#[async_trait]
impl SpaceDiscoveryService for StubSpaces {
    async fn discover_spaces(&self, data_source: &str) -> Result<ToolSummary, SpaceError> {
        self.record(format!("discover:{}", data_source));
        self.check(data_source)?;
        Ok(render_space_list(&parse_space_list(SAMPLE_CSV)))
    }
}

#[async_trait]
impl SpaceSchemaService for StubSpaces {
    async fn view_parameters(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError> {
        self.record(format!("view_parameters:{}:{:?}", space_name, token));
        self.check(space_name)?;
        Ok(ToolSummary::new(
            format!("# Parameters for {}", space_name),
            1,
            1,
        ))
    }
}

#[async_trait]
impl SpaceInvokeService for StubSpaces {
    async fn invoke_space(
        &self,
        space_name: &str,
        parameters: &str,
        token: Option<&str>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<SpaceResult, SpaceError> {
        self.record(format!("invoke:{}:{}:{:?}", space_name, parameters, token));
        let arguments = parse_parameters(parameters)?;
        self.check(space_name)?;
        progress.step(1, 1, "done").await;
        Ok(SpaceResult::PassThrough(InvokeOutput {
            content: vec![Content::text(format!(
                "ran {} with {} argument(s)",
                space_name,
                arguments.len()
            ))],
            is_error: false,
            warnings: Vec::new(),
        }))
    }
}

pub fn services(stub: &Arc<StubSpaces>) -> SpaceServices {
    SpaceServices {
        search: stub.clone(),
        discovery: stub.clone(),
        schema: stub.clone(),
        invoke: stub.clone(),
    }
}

/// Standard-mode router with a token configured.
pub fn standard_router(stub: &Arc<StubSpaces>) -> SpaceRouter {
    SpaceRouter::new(None, Some(TEST_TOKEN.to_string()), services(stub))
}

/// Discover-mode router reading from `source`.
pub fn discover_router(stub: &Arc<StubSpaces>, source: &str) -> SpaceRouter {
    SpaceRouter::new(
        Some(source.to_string()),
        Some(TEST_TOKEN.to_string()),
        services(stub),
    )
}

/// Router whose mode disagrees with its data source.
pub fn forced_router(stub: &Arc<StubSpaces>, mode: Mode) -> SpaceRouter {
    SpaceRouter::with_mode(mode, None, None, services(stub))
}

pub fn test_server(router: SpaceRouter) -> SpaceServer {
    SpaceServer::new(router)
}
