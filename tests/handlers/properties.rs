//! Property tests: no request shape makes the router fail or panic.

use crate::common::harness::{discover_router, standard_router, StubSpaces};

use dynaspace::mcp::tools::space::Mode;
use dynaspace::mcp::SpaceArgs;
use dynaspace::services::noop_progress;
use proptest::prelude::*;

fn operation_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        prop::sample::select(vec![
            "find",
            "FIND",
            "discover",
            "view_parameters",
            "View_Parameters",
            "invoke",
            "INVOKE",
        ])
        .prop_map(|s| Some(s.to_string())),
        ".{0,20}".prop_map(Some),
    ]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), ".{0,40}".prop_map(Some)]
}

fn args_strategy() -> impl Strategy<Value = SpaceArgs> {
    (
        operation_strategy(),
        optional_text(),
        prop::option::of(-1000.0f64..1000.0),
        optional_text(),
        prop_oneof![
            Just(None),
            Just(Some("{}".to_string())),
            Just(Some("[1]".to_string())),
            ".{0,40}".prop_map(Some),
        ],
    )
        .prop_map(|(operation, search_query, limit, space_name, parameters)| SpaceArgs {
            operation,
            search_query,
            limit,
            space_name,
            parameters,
        })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_router_always_answers(args in args_strategy(), discover in any::<bool>()) {
        let stub = StubSpaces::new();
        let router = if discover {
            discover_router(&stub, "spaces.csv")
        } else {
            standard_router(&stub)
        };

        let result = runtime().block_on(router.execute(args.clone(), noop_progress()));

        if let Some(summary) = result.as_summary() {
            prop_assert!(summary.results_shared <= summary.total_results);
            if summary.is_error {
                prop_assert_eq!(summary.total_results, 0);
                prop_assert!(!summary.formatted.is_empty());
            }
        }

        // Only a legal, fully specified invoke with object parameters may pass through.
        if !result.is_error() && result.as_summary().is_none() {
            let op = args.requested_operation().unwrap_or_default().to_lowercase();
            prop_assert_eq!(op, "invoke");
        }
    }

    #[test]
    fn prop_illegal_operations_never_reach_collaborators(
        name in "[a-z_]{1,16}",
        discover in any::<bool>(),
    ) {
        let mode = if discover { Mode::Discover } else { Mode::Standard };
        prop_assume!(mode.allows(&name).is_none());

        let stub = StubSpaces::new();
        let router = if discover {
            discover_router(&stub, "spaces.csv")
        } else {
            standard_router(&stub)
        };
        let result = runtime().block_on(router.execute(SpaceArgs::with_operation(&name), noop_progress()));

        prop_assert!(result.is_error());
        prop_assert!(stub.calls().is_empty());
    }
}
