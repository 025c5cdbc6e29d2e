//! Hugging Face hub HTTP client.
//!
//! One `reqwest::Client` is shared by search, space lookup and remote CSV
//! fetches. The request timeout configured here is the only deadline for
//! plain HTTP calls; MCP sessions to spaces have their own (see `remote`).

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::utils::sanitize::validate_space_name;
use crate::SpaceError;

/// One hit from the hub's semantic space search.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceSearchHit {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "shortDescription")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub ai_short_description: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    /// Higher is closer to the query. Absent on some hub versions.
    #[serde(default, rename = "semanticRelevancyScore")]
    pub relevancy: Option<f64>,
}

impl SpaceSearchHit {
    /// Best available one-line description.
    pub fn description(&self) -> Option<&str> {
        let non_blank = |d: &&String| !d.trim().is_empty();
        self.short_description
            .as_ref()
            .filter(non_blank)
            .or_else(|| self.ai_short_description.as_ref().filter(non_blank))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpaceRuntime {
    #[serde(default)]
    pub stage: Option<String>,
}

/// Space metadata from `GET /api/spaces/{owner}/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceInfo {
    pub id: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub runtime: Option<SpaceRuntime>,
}

impl SpaceInfo {
    /// Streamable-HTTP MCP endpoint exposed by a Gradio space.
    pub fn mcp_endpoint(&self) -> Result<String, SpaceError> {
        let host = match (&self.host, &self.subdomain) {
            (Some(host), _) if !host.is_empty() => host.trim_end_matches('/').to_string(),
            (_, Some(sub)) if !sub.is_empty() => format!("https://{}.hf.space", sub),
            _ => {
                return Err(SpaceError::Schema(format!(
                    "space '{}' has no public host; is it a running Gradio space?",
                    self.id
                )))
            }
        };
        Ok(format!("{}/gradio_api/mcp/", host))
    }

    pub fn stage(&self) -> Option<&str> {
        self.runtime.as_ref().and_then(|r| r.stage.as_deref())
    }
}

/// Thin client over the hub REST API.
pub struct HubClient {
    http: reqwest::Client,
    base_url: String,
}

impl HubClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SpaceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dynaspace/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpaceError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Semantic search over MCP-enabled Gradio spaces.
    pub async fn semantic_search(
        &self,
        query: &str,
        limit: usize,
        token: Option<&str>,
    ) -> Result<Vec<SpaceSearchHit>, SpaceError> {
        let url = format!("{}/api/spaces/semantic-search", self.base_url);
        debug!(%url, query, limit, "hub semantic search");

        let limit = limit.to_string();
        let request = self.http.get(&url).query(&[
            ("q", query),
            ("sdk", "gradio"),
            ("filter", "mcp-server"),
            ("limit", limit.as_str()),
        ]);

        let response = with_token(request, token).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Look up a single space.
    pub async fn space_info(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<SpaceInfo, SpaceError> {
        validate_space_name(space_name)?;
        let url = format!("{}/api/spaces/{}", self.base_url, space_name);
        debug!(%url, "hub space lookup");

        let response = with_token(self.http.get(&url), token).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SpaceError::NotFound(space_name.to_string()));
        }
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a text document (used for remote discovery lists).
    pub async fn fetch_text(&self, url: &str) -> Result<String, SpaceError> {
        debug!(%url, "fetching text");
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

fn with_token(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SpaceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SpaceError::RemoteStatus {
        status: status.as_u16(),
        body: crate::utils::markdown::truncate(body.trim(), 300),
    })
}
