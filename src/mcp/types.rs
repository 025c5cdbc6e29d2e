use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::mcp::tools::space::Mode;
use crate::utils::params::JsonObject;

/// Name of the single tool this server exposes.
pub const TOOL_NAME: &str = "dynamic_space";

/// Human-facing title in the tool annotations.
pub const TOOL_TITLE: &str = "Dynamically use Gradio Applications";

/// Arguments of a `dynamic_space` call.
///
/// Nothing is structurally required: an absent `operation` asks the tool to
/// describe itself, and each operation checks its own fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SpaceArgs {
    /// Operation to run. Omit for usage instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Task or semantic search text (find).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Maximum results to return (find). Defaults to 10, rounded and
    /// clamped to 1..=50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    /// Space id as `owner/name` (view_parameters, invoke).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_name: Option<String>,
    /// JSON object string with the space's parameters (invoke).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl SpaceArgs {
    pub fn with_operation(op: &str) -> Self {
        Self {
            operation: Some(op.to_string()),
            ..Default::default()
        }
    }

    /// Requested operation; an empty string counts as absent.
    pub fn requested_operation(&self) -> Option<&str> {
        present(&self.operation)
    }

    pub fn space_name(&self) -> Option<&str> {
        present(&self.space_name)
    }

    pub fn parameters(&self) -> Option<&str> {
        present(&self.parameters)
    }

    pub fn search_query(&self) -> Option<&str> {
        present(&self.search_query)
    }

    /// Decode call arguments. A missing argument object is an empty request.
    pub fn from_arguments(arguments: Option<JsonObject>) -> Result<Self, serde_json::Error> {
        match arguments {
            Some(map) => serde_json::from_value(Value::Object(map)),
            None => Ok(Self::default()),
        }
    }
}

/// Input schema for `tools/list`, with `operation` restricted to the mode's
/// legal set.
pub fn space_input_schema(mode: Mode) -> Arc<JsonObject> {
    let schema = schemars::schema_for!(SpaceArgs);
    let mut object = match serde_json::to_value(&schema) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    };
    object.remove("$schema");
    object.insert("type".into(), Value::String("object".into()));

    let properties = object
        .entry("properties")
        .or_insert_with(|| Value::Object(JsonObject::new()));
    if let Value::Object(properties) = properties {
        properties.insert(
            "operation".into(),
            serde_json::json!({
                "type": "string",
                "enum": mode.operation_names(),
                "description": "Operation to run. Omit for usage instructions."
            }),
        );
    }

    Arc::new(object)
}
