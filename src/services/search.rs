//! `find` collaborator: semantic search for MCP-enabled spaces.

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::ToolSummary;
use crate::services::hub::{HubClient, SpaceSearchHit};
use crate::utils::markdown::{code_span, escape_markdown, truncate};
use crate::SpaceError;

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const MAX_SEARCH_LIMIT: u32 = 50;

const MISSING_QUERY: &str = r#"Error: Missing required parameter: "search_query"

Example:
```json
{
  "operation": "find",
  "search_query": "image generation",
  "limit": 10
}
```"#;

/// Finds spaces for the `find` operation.
#[async_trait]
pub trait SpaceSearchService: Send + Sync {
    /// Search for spaces matching `query`. A missing query is reported as an
    /// error summary, not an `Err`.
    async fn find_spaces(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError>;
}

/// Hub-backed implementation of [`SpaceSearchService`].
pub struct HubSearchService {
    hub: Arc<HubClient>,
}

impl HubSearchService {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl SpaceSearchService for HubSearchService {
    async fn find_spaces(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError> {
        let query = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => q,
            None => return Ok(ToolSummary::error(MISSING_QUERY)),
        };
        let limit = effective_limit(limit);

        let mut hits = self.hub.semantic_search(query, limit as usize, token).await?;
        rank_by_relevancy(&mut hits);
        Ok(render_search_results(query, &hits, limit as usize))
    }
}

/// Clamp a caller limit into `1..=MAX_SEARCH_LIMIT`.
pub fn effective_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT)
}

/// Round a requested limit (any JSON number) into `1..=MAX_SEARCH_LIMIT`.
pub fn clamp_requested_limit(limit: f64) -> u32 {
    if limit.is_nan() {
        return DEFAULT_SEARCH_LIMIT;
    }
    limit.round().clamp(1.0, MAX_SEARCH_LIMIT as f64) as u32
}

/// Order hits by descending relevancy. Unscored hits keep their hub order
/// after the scored ones.
pub fn rank_by_relevancy(hits: &mut [SpaceSearchHit]) {
    hits.sort_by(|a, b| match (a.relevancy, b.relevancy) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Render search hits as a markdown table.
pub fn render_search_results(query: &str, hits: &[SpaceSearchHit], limit: usize) -> ToolSummary {
    if hits.is_empty() {
        return ToolSummary::new(
            format!("No matching MCP-enabled Spaces found for \"{}\".", query),
            0,
            0,
        );
    }

    let shown = &hits[..hits.len().min(limit)];
    let mut markdown = format!(
        "# Spaces matching \"{}\"\n\nShowing {} of {} result(s). Use `\"operation\": \"view_parameters\"` to inspect a space before invoking it.\n\n",
        escape_markdown(query),
        shown.len(),
        hits.len()
    );
    markdown.push_str("| Space | Description | Likes | Space ID |\n");
    markdown.push_str("|-------|-------------|-------|----------|\n");

    for hit in shown {
        let name = hit
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| hit.id.rsplit('/').next().unwrap_or(&hit.id));
        let description = hit
            .description()
            .map(|d| escape_markdown(&truncate(d, 160)))
            .unwrap_or_else(|| "No description".to_string());
        let likes = hit
            .likes
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());

        markdown.push_str(&format!(
            "| [{}](https://hf.co/spaces/{}) | {} | {} | {} |\n",
            escape_markdown(name),
            hit.id,
            description,
            likes,
            code_span(&hit.id)
        ));
    }

    ToolSummary::new(markdown, hits.len() as u64, shown.len() as u64)
}
