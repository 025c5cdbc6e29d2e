//! Space records as they appear in discovery lists.

use serde::{Deserialize, Serialize};

/// One row of the curated spaces list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceEntry {
    /// Full space id, e.g. `evalstate/flux1_schnell`.
    pub space_id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SpaceEntry {
    /// Short display name: the part after the last `/`.
    pub fn short_name(&self) -> &str {
        self.space_id
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.space_id)
    }

    /// Public page for the space.
    pub fn url(&self) -> String {
        format!("https://hf.co/spaces/{}", self.space_id)
    }
}
