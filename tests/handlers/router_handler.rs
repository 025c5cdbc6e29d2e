//! Router dispatch tests: mode gating, normalization, delegation and error
//! containment.

use crate::common::harness::{
    discover_router, forced_router, standard_router, StubSpaces, TEST_TOKEN,
};

use dynaspace::mcp::tools::space::Mode;
use dynaspace::mcp::SpaceArgs;
use dynaspace::models::SpaceResult;
use dynaspace::services::noop_progress;
use pretty_assertions::assert_eq;

fn op(name: &str) -> SpaceArgs {
    SpaceArgs::with_operation(name)
}

fn summary_text(result: &SpaceResult) -> &str {
    &result.as_summary().expect("expected a summary").formatted
}

// ============================================================================
// USAGE
// ============================================================================

#[tokio::test]
async fn test_no_operation_returns_usage() {
    let stub = StubSpaces::new();
    let standard = standard_router(&stub)
        .execute(SpaceArgs::default(), noop_progress())
        .await;
    let discover = discover_router(&stub, "spaces.csv")
        .execute(SpaceArgs::default(), noop_progress())
        .await;

    for result in [&standard, &discover] {
        let summary = result.as_summary().unwrap();
        assert!(!summary.is_error);
        assert_eq!(summary.total_results, 1);
        assert_eq!(summary.results_shared, 1);
    }
    assert_ne!(summary_text(&standard), summary_text(&discover));
    assert!(summary_text(&standard).contains("### find"));
    assert!(summary_text(&discover).contains("### discover"));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_empty_operation_is_treated_as_absent() {
    let stub = StubSpaces::new();
    let result = standard_router(&stub)
        .execute(op(""), noop_progress())
        .await;
    assert!(!result.is_error());
    assert!(summary_text(&result).starts_with("# Gradio Space Interaction"));
}

#[tokio::test]
async fn test_padded_operation_is_unknown() {
    let stub = StubSpaces::new();
    let router = standard_router(&stub);

    let args = SpaceArgs {
        space_name: Some("a/b".into()),
        ..op(" view_parameters ")
    };
    let result = router.execute(args, noop_progress()).await;
    assert!(result.is_error());
    let text = summary_text(&result);
    assert!(text.starts_with("Unknown operation: \" view_parameters \"\n"));
    assert!(text.contains("Did you mean \"view_parameters\"?"));

    let result = router.execute(op("   "), noop_progress()).await;
    assert!(result.is_error());
    assert!(summary_text(&result).starts_with("Unknown operation: \"   \""));

    assert!(stub.calls().is_empty());
}

// ============================================================================
// LEGALITY
// ============================================================================

#[tokio::test]
async fn test_unknown_operation_lists_legal_set() {
    let stub = StubSpaces::new();

    let result = standard_router(&stub)
        .execute(op("search"), noop_progress())
        .await;
    let summary = result.as_summary().unwrap();
    assert!(summary.is_error);
    assert_eq!(summary.total_results, 0);
    for name in ["find", "view_parameters", "invoke"] {
        assert!(summary.formatted.contains(name));
    }

    let result = discover_router(&stub, "spaces.csv")
        .execute(op("search"), noop_progress())
        .await;
    assert!(summary_text(&result).contains("Available operations: discover, view_parameters, invoke"));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_operation_echoes_verbatim_value() {
    let stub = StubSpaces::new();
    let result = standard_router(&stub)
        .execute(op("Launch"), noop_progress())
        .await;
    assert!(summary_text(&result).starts_with("Unknown operation: \"Launch\"\n"));
}

#[tokio::test]
async fn test_find_in_discover_mode_points_to_discover() {
    let stub = StubSpaces::new();
    let result = discover_router(&stub, "spaces.csv")
        .execute(op("FIND"), noop_progress())
        .await;

    assert!(result.is_error());
    assert_eq!(
        summary_text(&result),
        "The \"find\" operation is not available in this mode. Use \"discover\" instead."
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_discover_in_standard_mode_is_generic_unknown() {
    let stub = StubSpaces::new();
    let result = standard_router(&stub)
        .execute(op("discover"), noop_progress())
        .await;

    assert!(result.is_error());
    let text = summary_text(&result);
    assert!(text.starts_with("Unknown operation: \"discover\""));
    assert!(text.contains("Available operations: find, view_parameters, invoke"));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_operation_matching_ignores_case() {
    let mut outputs = Vec::new();
    for name in ["invoke", "INVOKE", "Invoke"] {
        let stub = StubSpaces::new();
        let args = SpaceArgs {
            space_name: Some("evalstate/flux1_schnell".into()),
            parameters: Some(r#"{"prompt": "a cat"}"#.into()),
            ..op(name)
        };
        let result = standard_router(&stub).execute(args, noop_progress()).await;
        assert!(!result.is_error());
        assert_eq!(stub.calls().len(), 1);
        outputs.push(serde_json::to_value(&result).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

// ============================================================================
// DELEGATION
// ============================================================================

#[tokio::test]
async fn test_find_delegates_query_limit_and_token() {
    let stub = StubSpaces::new();
    let args = SpaceArgs {
        search_query: Some("image generation".into()),
        limit: Some(5.0),
        ..op("find")
    };
    let result = standard_router(&stub).execute(args, noop_progress()).await;

    let summary = result.as_summary().unwrap();
    assert_eq!(summary.formatted, "results for image generation");
    assert_eq!(summary.total_results, 3);
    assert_eq!(
        stub.calls(),
        vec![format!(
            "find:Some(\"image generation\"):Some(5):Some(\"{}\")",
            TEST_TOKEN
        )]
    );
}

#[tokio::test]
async fn test_find_limit_accepts_any_number() {
    for (requested, expected) in [(5.0, 5), (4.6, 5), (-3.0, 1), (0.0, 1), (500.0, 50)] {
        let stub = StubSpaces::new();
        let args = SpaceArgs {
            search_query: Some("tts".into()),
            limit: Some(requested),
            ..op("find")
        };
        let result = standard_router(&stub).execute(args, noop_progress()).await;

        assert!(!result.is_error(), "limit {} was rejected", requested);
        assert_eq!(
            stub.calls(),
            vec![format!(
                "find:Some(\"tts\"):Some({}):Some(\"{}\")",
                expected, TEST_TOKEN
            )]
        );
    }
}

#[tokio::test]
async fn test_discover_delegates_configured_source() {
    let stub = StubSpaces::new();
    let router = discover_router(&stub, "https://example.com/spaces.csv");
    assert!(router.is_discover_mode());
    assert_eq!(router.data_source(), Some("https://example.com/spaces.csv"));

    let result = router.execute(op("discover"), noop_progress()).await;
    let summary = result.as_summary().unwrap();
    assert!(!summary.is_error);
    assert_eq!(summary.total_results, 2);
    assert!(summary.formatted.contains("A, \"quoted\" desc"));
    assert_eq!(
        stub.calls(),
        vec!["discover:https://example.com/spaces.csv".to_string()]
    );
}

#[tokio::test]
async fn test_discover_without_source_reports_configuration() {
    let stub = StubSpaces::new();
    let router = forced_router(&stub, Mode::Discover);
    let result = router.execute(op("discover"), noop_progress()).await;

    assert!(result.is_error());
    assert_eq!(
        summary_text(&result),
        "Error: DYNAMIC_SPACE_DATA environment variable is not set."
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_view_parameters_delegates() {
    let stub = StubSpaces::new();
    let args = SpaceArgs {
        space_name: Some("evalstate/flux1_schnell".into()),
        ..op("view_parameters")
    };
    let result = standard_router(&stub).execute(args, noop_progress()).await;
    assert_eq!(summary_text(&result), "# Parameters for evalstate/flux1_schnell");
}

#[tokio::test]
async fn test_invoke_returns_pass_through() {
    let stub = StubSpaces::new();
    let args = SpaceArgs {
        space_name: Some("evalstate/flux1_schnell".into()),
        parameters: Some(r#"{"prompt": "a cat", "num_steps": 4}"#.into()),
        ..op("invoke")
    };
    let result = discover_router(&stub, "spaces.csv")
        .execute(args, noop_progress())
        .await;

    match result {
        SpaceResult::PassThrough(output) => {
            assert_eq!(output.text(), "ran evalstate/flux1_schnell with 2 argument(s)");
        }
        other => panic!("expected pass-through, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_fields_do_not_reach_collaborators() {
    let stub = StubSpaces::new();
    let router = standard_router(&stub);

    let empty_name = SpaceArgs {
        space_name: Some(String::new()),
        ..op("view_parameters")
    };
    assert!(router.execute(empty_name, noop_progress()).await.is_error());

    let no_params = SpaceArgs {
        space_name: Some("a/b".into()),
        parameters: Some(String::new()),
        ..op("invoke")
    };
    let result = router.execute(no_params, noop_progress()).await;
    assert!(result.is_error());
    assert!(summary_text(&result).contains("\"space_name\": \"a/b\""));

    assert!(stub.calls().is_empty());
}

// ============================================================================
// ERROR CONTAINMENT
// ============================================================================

#[tokio::test]
async fn test_collaborator_failure_becomes_error_summary() {
    let stub = StubSpaces::failing("connection refused");
    let args = SpaceArgs {
        space_name: Some("a/b".into()),
        ..op("View_Parameters")
    };
    let result = standard_router(&stub).execute(args, noop_progress()).await;

    let summary = result.as_summary().unwrap();
    assert!(summary.is_error);
    assert_eq!(summary.total_results, 0);
    assert_eq!(
        summary.formatted,
        "Error executing View_Parameters: Failed to connect to space 'a/b': connection refused"
    );
}

#[tokio::test]
async fn test_invalid_parameters_reach_caller() {
    let stub = StubSpaces::new();
    let args = SpaceArgs {
        space_name: Some("a/b".into()),
        parameters: Some("[1, 2, 3]".into()),
        ..op("invoke")
    };
    let result = standard_router(&stub).execute(args, noop_progress()).await;

    assert!(result.is_error());
    assert_eq!(
        summary_text(&result),
        "Error executing invoke: Invalid parameters: parameters must be a JSON object string, got an array"
    );
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let stub = StubSpaces::new();
    let router = standard_router(&stub);

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                let args = SpaceArgs {
                    search_query: Some(format!("query {}", i)),
                    ..SpaceArgs::with_operation("find")
                };
                router.execute(args, noop_progress()).await
            })
        })
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        let result = task.await.unwrap();
        assert_eq!(summary_text(&result), format!("results for query {}", i));
    }
    assert_eq!(stub.calls().len(), 8);
}
