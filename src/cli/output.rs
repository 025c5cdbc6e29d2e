//! Output formatting infrastructure for CLI commands.

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::models::SpaceResult;

/// Output mode for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Markdown,
}

impl OutputMode {
    pub fn from_flags(json: bool, md: bool) -> Self {
        if json {
            OutputMode::Json
        } else if md {
            OutputMode::Markdown
        } else {
            OutputMode::Human
        }
    }
}

/// Print a single item as pretty-printed JSON.
pub fn output_json<T: Serialize>(item: &T) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&format!("Failed to serialize to JSON: {}", e)),
    }
}

/// Print a formatted table with headers and rows.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        println!("{}", "No results found.".dimmed());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    for row in rows {
        table.add_row(row);
    }

    println!("{table}");
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

/// Print a dimmed hint/suggestion message.
pub fn print_hint(msg: &str) {
    println!("{}", msg.dimmed());
}

/// Print a tool result in the requested mode. Returns `false` for errors.
pub fn print_result(result: &SpaceResult, mode: OutputMode) -> bool {
    match mode {
        OutputMode::Json => output_json(result),
        OutputMode::Markdown => println!("{}", result_text(result)),
        OutputMode::Human => {
            let text = result_text(result);
            if result.is_error() {
                print_error(text.trim_start_matches("Error: "));
            } else {
                println!("{}", text);
            }
            if let SpaceResult::Summary(summary) = result {
                if !summary.is_error && summary.results_shared < summary.total_results {
                    print_hint(&format!(
                        "Showing {} of {} results.",
                        summary.results_shared, summary.total_results
                    ));
                }
            }
        }
    }
    !result.is_error()
}

/// Plain text of a result: the summary text, or warnings plus text content.
pub fn result_text(result: &SpaceResult) -> String {
    match result {
        SpaceResult::Summary(summary) => summary.formatted.clone(),
        SpaceResult::PassThrough(output) => {
            let mut lines: Vec<String> = output
                .warnings
                .iter()
                .map(|w| format!("warning: {}", w))
                .collect();
            let text = output.text();
            if text.is_empty() {
                lines.push(format!("({} non-text content item(s))", output.content.len()));
            } else {
                lines.push(text);
            }
            lines.join("\n")
        }
    }
}
