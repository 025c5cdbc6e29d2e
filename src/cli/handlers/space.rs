//! Handlers for the space commands. Each one builds a `dynamic_space`
//! request and runs it through the same router the MCP server uses.

use anyhow::Result;

use crate::cli::output::{
    output_json, print_error, print_hint, print_result, print_table, OutputMode,
};
use crate::init::AppContext;
use crate::mcp::SpaceArgs;
use crate::services::noop_progress;

async fn run(ctx: &AppContext, args: SpaceArgs, mode: OutputMode) -> bool {
    let result = ctx.router.execute(args, noop_progress()).await;
    print_result(&result, mode)
}

pub async fn handle_usage(ctx: &AppContext, mode: OutputMode) -> bool {
    run(ctx, SpaceArgs::default(), mode).await
}

pub async fn handle_find(
    ctx: &AppContext,
    query: &str,
    limit: Option<u32>,
    mode: OutputMode,
) -> bool {
    let args = SpaceArgs {
        search_query: Some(query.to_string()),
        limit: limit.map(f64::from),
        ..SpaceArgs::with_operation("find")
    };
    run(ctx, args, mode).await
}

/// Human output renders the parsed list as a table; other modes go
/// through the router unchanged.
pub async fn handle_discover(ctx: &AppContext, mode: OutputMode) -> Result<bool> {
    let source = match (mode, ctx.router.data_source()) {
        (OutputMode::Human, Some(source)) if ctx.mode().is_discover() => source,
        _ => return Ok(run(ctx, SpaceArgs::with_operation("discover"), mode).await),
    };

    let entries = match ctx.discovery.load_entries(source).await {
        Ok(entries) => entries,
        Err(e) => {
            print_error(&crate::services::discover::fetch_error(source, &e));
            return Ok(false);
        }
    };

    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                entry.space_id.clone(),
                entry.category.clone().unwrap_or_else(|| "-".to_string()),
                entry
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description".to_string()),
            ]
        })
        .collect();
    print_table(&["Space ID", "Category", "Description"], rows);
    if !entries.is_empty() {
        print_hint(&format!(
            "{} space(s). Inspect one with: dynaspace params <space id>",
            entries.len()
        ));
    }
    Ok(true)
}

pub async fn handle_params(ctx: &AppContext, space: &str, mode: OutputMode) -> bool {
    let args = SpaceArgs {
        space_name: Some(space.to_string()),
        ..SpaceArgs::with_operation("view_parameters")
    };
    run(ctx, args, mode).await
}

pub async fn handle_invoke(
    ctx: &AppContext,
    space: &str,
    parameters: &str,
    mode: OutputMode,
) -> bool {
    let args = SpaceArgs {
        space_name: Some(space.to_string()),
        parameters: Some(parameters.to_string()),
        ..SpaceArgs::with_operation("invoke")
    };
    run(ctx, args, mode).await
}

/// Raw request, decoded exactly as the MCP server decodes tool arguments.
pub async fn handle_call(ctx: &AppContext, request: &str, mode: OutputMode) -> Result<bool> {
    let value: serde_json::Value = serde_json::from_str(request)?;
    let arguments = match value {
        serde_json::Value::Object(map) => Some(map),
        serde_json::Value::Null => None,
        _ => anyhow::bail!("Request must be a JSON object"),
    };

    let args = match SpaceArgs::from_arguments(arguments) {
        Ok(args) => args,
        Err(e) => {
            if mode == OutputMode::Json {
                output_json(&serde_json::json!({"error": e.to_string()}));
            } else {
                print_error(&format!("Invalid request: {}", e));
            }
            return Ok(false);
        }
    };
    Ok(run(ctx, args, mode).await)
}
