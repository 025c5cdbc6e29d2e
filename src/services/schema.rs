//! `view_parameters` collaborator: render a space's tool schema.

use async_trait::async_trait;
use rmcp::model::Tool;
use serde_json::Value;
use std::sync::Arc;

use crate::models::ToolSummary;
use crate::services::remote::SpaceConnector;
use crate::utils::markdown::{code_span, escape_markdown, truncate};
use crate::utils::params::{property_types, required_properties};
use crate::SpaceError;

/// Describes the parameters a space accepts.
#[async_trait]
pub trait SpaceSchemaService: Send + Sync {
    async fn view_parameters(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError>;
}

/// Reads the schema from the space's own MCP endpoint.
pub struct McpSchemaService {
    connector: Arc<SpaceConnector>,
}

impl McpSchemaService {
    pub fn new(connector: Arc<SpaceConnector>) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl SpaceSchemaService for McpSchemaService {
    async fn view_parameters(
        &self,
        space_name: &str,
        token: Option<&str>,
    ) -> Result<ToolSummary, SpaceError> {
        let tool = self.connector.first_tool(space_name, token).await?;
        Ok(render_parameters(space_name, &tool))
    }
}

/// Markdown description of a tool's input schema.
pub fn render_parameters(space_name: &str, tool: &Tool) -> ToolSummary {
    let mut markdown = format!("# Parameters for {}\n\n", space_name);
    markdown.push_str(&format!("**Tool:** {}\n", code_span(&tool.name)));
    if let Some(description) = tool.description.as_deref().filter(|d| !d.trim().is_empty()) {
        markdown.push_str(&format!("\n{}\n", description.trim()));
    }
    markdown.push('\n');

    let schema = tool.input_schema.as_ref();
    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(props) if !props.is_empty() => props,
        _ => {
            markdown.push_str("This tool takes no parameters.\n");
            return ToolSummary::new(markdown, 0, 0);
        }
    };
    let required = required_properties(schema);

    markdown.push_str("| Parameter | Type | Required | Default | Description |\n");
    markdown.push_str("|-----------|------|----------|---------|-------------|\n");

    for (name, property) in properties {
        let types = property_types(property);
        let kind = if types.is_empty() {
            "any".to_string()
        } else {
            types.join(" \\| ")
        };
        let default = property
            .get("default")
            .map(|d| code_span(&truncate(&d.to_string(), 40)))
            .unwrap_or_else(|| "-".to_string());

        let mut description = property
            .get("description")
            .and_then(Value::as_str)
            .map(|d| escape_markdown(&truncate(d.trim(), 200)))
            .unwrap_or_default();
        if let Some(values) = property.get("enum").and_then(Value::as_array) {
            let allowed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            if !description.is_empty() {
                description.push(' ');
            }
            description.push_str(&format!(
                "Allowed: {}",
                escape_markdown(&allowed.join(", "))
            ));
        }

        markdown.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            code_span(name),
            kind,
            if required.contains(&name.as_str()) {
                "yes"
            } else {
                "no"
            },
            default,
            if description.is_empty() {
                "-"
            } else {
                &description
            }
        ));
    }

    markdown.push_str(&format!(
        "\nPass these as a JSON object string in `parameters` with `\"operation\": \"invoke\"` and `\"space_name\": \"{}\"`.\n",
        space_name
    ));

    let count = properties.len() as u64;
    ToolSummary::new(markdown, count, count)
}
