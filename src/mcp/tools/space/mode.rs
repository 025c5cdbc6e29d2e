//! Operating mode and the operations each mode accepts.
//!
//! The mode is fixed for the life of the process. A configured data source
//! switches the tool from open hub search (`find`) to a curated list
//! (`discover`); everything else is shared.

use std::fmt;

use crate::mcp::tools::space::usage::{DISCOVER_USAGE, STANDARD_USAGE};

/// Minimum normalized similarity for a "Did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Find,
    Discover,
    ViewParameters,
    Invoke,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Find => "find",
            Operation::Discover => "discover",
            Operation::ViewParameters => "view_parameters",
            Operation::Invoke => "invoke",
        }
    }

    /// Parse an operation name, ignoring case only.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "find" => Some(Operation::Find),
            "discover" => Some(Operation::Discover),
            "view_parameters" => Some(Operation::ViewParameters),
            "invoke" => Some(Operation::Invoke),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const STANDARD_OPERATIONS: &[Operation] = &[
    Operation::Find,
    Operation::ViewParameters,
    Operation::Invoke,
];

pub const DISCOVER_OPERATIONS: &[Operation] = &[
    Operation::Discover,
    Operation::ViewParameters,
    Operation::Invoke,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Hub-wide semantic search.
    #[default]
    Standard,
    /// Curated list from a configured data source.
    Discover,
}

impl Mode {
    /// A non-blank data source selects Discover mode.
    pub fn from_data_source(data_source: Option<&str>) -> Self {
        match data_source {
            Some(source) if !source.trim().is_empty() => Mode::Discover,
            _ => Mode::Standard,
        }
    }

    pub fn is_discover(&self) -> bool {
        matches!(self, Mode::Discover)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Discover => "discover",
        }
    }

    /// Legal operations, in the order they are listed to callers.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Mode::Standard => STANDARD_OPERATIONS,
            Mode::Discover => DISCOVER_OPERATIONS,
        }
    }

    pub fn operation_names(&self) -> Vec<&'static str> {
        self.operations().iter().map(Operation::as_str).collect()
    }

    /// Case-insensitive membership test against this mode's legal set.
    pub fn allows(&self, name: &str) -> Option<Operation> {
        Operation::parse(name).filter(|op| self.operations().contains(op))
    }

    /// Operation to use instead of `op`, when `op` belongs to the other mode
    /// and has a direct counterpart here.
    pub fn redirect(&self, op: Operation) -> Option<Operation> {
        match (self, op) {
            (Mode::Discover, Operation::Find) => Some(Operation::Discover),
            _ => None,
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Mode::Standard => STANDARD_USAGE,
            Mode::Discover => DISCOVER_USAGE,
        }
    }

    /// Description advertised in `tools/list`.
    pub fn tool_description(&self) -> &'static str {
        match self {
            Mode::Standard => {
                "Find (semantic/task search), inspect (view parameter schema) and invoke Gradio MCP Spaces to run ML tasks. Call with no operation for full usage instructions."
            }
            Mode::Discover => {
                "Discover the curated Gradio MCP Spaces, inspect (view parameter schema) and invoke them to run ML tasks. Call with no operation for full usage instructions."
            }
        }
    }

    /// Closest legal operation to a misspelled name, if any is close enough.
    pub fn suggest(&self, input: &str) -> Option<Operation> {
        use rapidfuzz::distance::levenshtein;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        self.operations()
            .iter()
            .map(|op| {
                let score = levenshtein::normalized_similarity(input.chars(), op.as_str().chars());
                (*op, score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(op, _)| op)
    }
}
