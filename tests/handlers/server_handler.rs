//! MCP translation layer: tool definition and `tools/call` handling.

use crate::common::harness::{discover_router, standard_router, test_server, StubSpaces};

use dynaspace::mcp::{TOOL_NAME, TOOL_TITLE};
use dynaspace::services::noop_progress;
use pretty_assertions::assert_eq;
use rmcp::ServerHandler;

fn arguments(value: serde_json::Value) -> Option<serde_json::Map<String, serde_json::Value>> {
    value.as_object().cloned()
}

#[test]
fn test_tool_definition_follows_mode() {
    let stub = StubSpaces::new();

    let tool = test_server(standard_router(&stub)).tool_definition();
    assert_eq!(tool.name, TOOL_NAME);
    assert!(tool.description.as_deref().unwrap().starts_with("Find"));
    assert_eq!(
        tool.input_schema["properties"]["operation"]["enum"],
        serde_json::json!(["find", "view_parameters", "invoke"])
    );

    let tool = test_server(discover_router(&stub, "spaces.csv")).tool_definition();
    assert!(tool.description.as_deref().unwrap().starts_with("Discover"));
    assert_eq!(
        tool.input_schema["properties"]["operation"]["enum"],
        serde_json::json!(["discover", "view_parameters", "invoke"])
    );
}

#[test]
fn test_tool_annotations() {
    let tool = test_server(standard_router(&StubSpaces::new())).tool_definition();
    let annotations = tool.annotations.unwrap();
    assert_eq!(annotations.title.as_deref(), Some(TOOL_TITLE));
    assert_eq!(annotations.read_only_hint, Some(false));
    assert_eq!(annotations.open_world_hint, Some(true));
}

#[test]
fn test_server_info_advertises_tools_only() {
    let info = test_server(standard_router(&StubSpaces::new())).get_info();
    assert_eq!(info.server_info.name, "dynaspace");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.prompts.is_none());
    assert!(info.instructions.unwrap().contains("standard mode"));
}

#[tokio::test]
async fn test_call_without_arguments_returns_usage() {
    let server = test_server(standard_router(&StubSpaces::new()));
    let result = server.call(TOOL_NAME, None, noop_progress()).await.unwrap();

    assert_eq!(result.is_error, Some(false));
    let text = &result.content[0].as_text().unwrap().text;
    assert!(text.starts_with("# Gradio Space Interaction"));
}

#[tokio::test]
async fn test_call_unknown_tool_is_protocol_error() {
    let server = test_server(standard_router(&StubSpaces::new()));
    let err = server
        .call("space_search", None, noop_progress())
        .await
        .unwrap_err();
    assert!(err.message.contains("Unknown tool: space_search"));
}

#[tokio::test]
async fn test_undecodable_arguments_become_error_result() {
    let server = test_server(standard_router(&StubSpaces::new()));
    let result = server
        .call(
            TOOL_NAME,
            arguments(serde_json::json!({"operation": "find", "limit": "ten"})),
            noop_progress(),
        )
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let text = &result.content[0].as_text().unwrap().text;
    assert!(text.starts_with("Invalid arguments for dynamic_space"));
}

#[tokio::test]
async fn test_fractional_and_negative_limits_decode() {
    for limit in [serde_json::json!(5.0), serde_json::json!(-3)] {
        let stub = StubSpaces::new();
        let server = test_server(standard_router(&stub));
        let result = server
            .call(
                TOOL_NAME,
                arguments(serde_json::json!({
                    "operation": "find",
                    "search_query": "x",
                    "limit": limit
                })),
                noop_progress(),
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(stub.calls().len(), 1);
        assert!(stub.calls()[0].starts_with("find:Some(\"x\"):Some("));
    }
}

#[tokio::test]
async fn test_invoke_content_passes_through() {
    let stub = StubSpaces::new();
    let server = test_server(discover_router(&stub, "spaces.csv"));
    let result = server
        .call(
            TOOL_NAME,
            arguments(serde_json::json!({
                "operation": "invoke",
                "space_name": "a/b",
                "parameters": "{\"prompt\": \"hi\"}"
            })),
            noop_progress(),
        )
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(result.content.len(), 1);
    assert_eq!(
        result.content[0].as_text().unwrap().text,
        "ran a/b with 1 argument(s)"
    );
}

#[tokio::test]
async fn test_mode_mismatch_is_tool_error_not_protocol_error() {
    let server = test_server(discover_router(&StubSpaces::new(), "spaces.csv"));
    let result = server
        .call(
            TOOL_NAME,
            arguments(serde_json::json!({"operation": "find", "search_query": "tts"})),
            noop_progress(),
        )
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(result.content[0]
        .as_text()
        .unwrap()
        .text
        .contains("Use \"discover\" instead."));
}
