//! Result model shared by the router and every collaborator.
//!
//! A tool call ends in exactly one of two shapes: a formatted summary
//! (search listings, schemas, usage text, every error) or the raw content a
//! remote space produced. `SpaceResult` is the tagged union of both.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Human-readable result with counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummary {
    /// Markdown-oriented text. Diagnostic only when `is_error` is set.
    pub formatted: String,
    pub total_results: u64,
    /// Never exceeds `total_results`.
    pub results_shared: u64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolSummary {
    /// Successful summary. `shared` is clamped to `total`.
    pub fn new(formatted: impl Into<String>, total: u64, shared: u64) -> Self {
        Self {
            formatted: formatted.into(),
            total_results: total,
            results_shared: shared.min(total),
            is_error: false,
        }
    }

    /// Error summary: counts are always zero.
    pub fn error(formatted: impl Into<String>) -> Self {
        Self {
            formatted: formatted.into(),
            total_results: 0,
            results_shared: 0,
            is_error: true,
        }
    }
}

/// Content forwarded verbatim from a remote space invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeOutput {
    pub content: Vec<Content>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
    /// Non-fatal notes from parameter coercion (unknown keys etc).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl InvokeOutput {
    /// Wrap a remote tool result, keeping its content and error flag.
    pub fn from_remote(result: CallToolResult, warnings: Vec<String>) -> Self {
        Self {
            content: result.content,
            is_error: result.is_error.unwrap_or(false),
            warnings,
        }
    }

    /// Concatenated text items, for terminal output.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The dispatcher's return type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SpaceResult {
    Summary(ToolSummary),
    PassThrough(InvokeOutput),
}

impl SpaceResult {
    pub fn is_error(&self) -> bool {
        match self {
            SpaceResult::Summary(summary) => summary.is_error,
            SpaceResult::PassThrough(output) => output.is_error,
        }
    }

    pub fn as_summary(&self) -> Option<&ToolSummary> {
        match self {
            SpaceResult::Summary(summary) => Some(summary),
            SpaceResult::PassThrough(_) => None,
        }
    }

    /// Shorthand used by handlers returning a precondition failure.
    pub fn error(formatted: impl Into<String>) -> Self {
        SpaceResult::Summary(ToolSummary::error(formatted))
    }
}

impl From<ToolSummary> for SpaceResult {
    fn from(summary: ToolSummary) -> Self {
        SpaceResult::Summary(summary)
    }
}

impl From<InvokeOutput> for SpaceResult {
    fn from(output: InvokeOutput) -> Self {
        SpaceResult::PassThrough(output)
    }
}

impl From<SpaceResult> for CallToolResult {
    fn from(result: SpaceResult) -> Self {
        match result {
            SpaceResult::Summary(summary) => {
                let content = vec![Content::text(summary.formatted)];
                if summary.is_error {
                    CallToolResult::error(content)
                } else {
                    CallToolResult::success(content)
                }
            }
            SpaceResult::PassThrough(output) => {
                let mut content = Vec::with_capacity(output.content.len() + 1);
                if !output.warnings.is_empty() {
                    let lines: Vec<String> =
                        output.warnings.iter().map(|w| format!("- {}", w)).collect();
                    content.push(Content::text(format!("Warnings:\n{}", lines.join("\n"))));
                }
                content.extend(output.content);
                if output.is_error {
                    CallToolResult::error(content)
                } else {
                    CallToolResult::success(content)
                }
            }
        }
    }
}
