//! `discover` collaborator: curated space list from a CSV data source.
//!
//! The source is line-oriented CSV with columns `spaceId, category,
//! description`. Fields may be double-quoted; `""` inside quotes is a literal
//! quote. Rows whose first column is empty are skipped.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{SpaceEntry, ToolSummary};
use crate::services::hub::HubClient;
use crate::utils::markdown::{code_span, escape_markdown};
use crate::SpaceError;

pub const RESULTS_HEADER: &str = "# Available Spaces

These MCP-enabled Spaces can be invoked with the `dynamic_space` tool.
Use `\"operation\": \"view_parameters\"` to inspect a space's parameters before invoking it.

";

pub const NO_DATA: &str = "No spaces available in the dynamic spaces list.";

/// Where the curated list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource<'a> {
    Remote(&'a str),
    File(&'a str),
}

impl<'a> DataSource<'a> {
    pub fn parse(location: &'a str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Remote(location)
        } else if let Some(path) = location.strip_prefix("file://") {
            DataSource::File(path)
        } else {
            DataSource::File(location)
        }
    }
}

/// Lists the curated spaces for the `discover` operation.
#[async_trait]
pub trait SpaceDiscoveryService: Send + Sync {
    async fn discover_spaces(&self, data_source: &str) -> Result<ToolSummary, SpaceError>;
}

/// CSV-backed implementation of [`SpaceDiscoveryService`].
pub struct CsvDiscoveryService {
    hub: Arc<HubClient>,
}

impl CsvDiscoveryService {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    /// Fetch the raw CSV text from a URL or local path.
    pub async fn fetch(&self, location: &str) -> Result<String, SpaceError> {
        match DataSource::parse(location) {
            DataSource::Remote(url) => self.hub.fetch_text(url).await,
            DataSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        }
    }

    /// Fetch and parse the list without rendering it.
    pub async fn load_entries(&self, location: &str) -> Result<Vec<SpaceEntry>, SpaceError> {
        let text = self.fetch(location).await?;
        Ok(parse_space_list(&text))
    }
}

#[async_trait]
impl SpaceDiscoveryService for CsvDiscoveryService {
    async fn discover_spaces(&self, data_source: &str) -> Result<ToolSummary, SpaceError> {
        let text = match self.fetch(data_source).await {
            Ok(text) => text,
            Err(e) => {
                warn!(source = data_source, error = %e, "discovery fetch failed");
                return Ok(ToolSummary::error(fetch_error(data_source, &e)));
            }
        };

        let entries = parse_space_list(&text);
        debug!(source = data_source, rows = entries.len(), "discovery list parsed");
        Ok(render_space_list(&entries))
    }
}

/// Message for an unreachable or unreadable data source.
pub fn fetch_error(location: &str, error: &SpaceError) -> String {
    let reason = match error {
        SpaceError::RemoteStatus { status, .. } => format!("HTTP {}", status),
        other => other.to_string(),
    };
    format!("Error fetching spaces from {}: {}", location, reason)
}

/// Split one CSV line into trimmed fields.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Parse the whole document, skipping blank lines and rows without a space id.
pub fn parse_space_list(text: &str) -> Vec<SpaceEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = parse_csv_line(line).into_iter();
            let space_id = fields.next().filter(|id| !id.is_empty())?;
            let category = fields.next().filter(|c| !c.is_empty());
            let description = fields.next().filter(|d| !d.is_empty());
            Some(SpaceEntry {
                space_id,
                category,
                description,
            })
        })
        .collect()
}

/// Render entries as the markdown discovery table.
pub fn render_space_list(entries: &[SpaceEntry]) -> ToolSummary {
    if entries.is_empty() {
        return ToolSummary::new(NO_DATA, 0, 0);
    }

    let mut markdown = String::from(RESULTS_HEADER);
    markdown.push_str("| Space | Category | Description | Space ID |\n");
    markdown.push_str("|-------|----------|-------------|----------|\n");

    for entry in entries {
        markdown.push_str(&format!(
            "| [{}]({}) | {} | {} | {} |\n",
            escape_markdown(entry.short_name()),
            entry.url(),
            escape_markdown(entry.category.as_deref().unwrap_or("-")),
            escape_markdown(entry.description.as_deref().unwrap_or("No description")),
            code_span(&entry.space_id)
        ));
    }

    let count = entries.len() as u64;
    ToolSummary::new(markdown, count, count)
}
