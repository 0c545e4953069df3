//! Tree limits as they appear in configuration files.

use serde::{Deserialize, Serialize};

/// Split threshold and depth ceiling shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuadtreeConfig {
    /// Entities a leaf may hold before it splits.
    #[serde(default = "default_max_entities")]
    pub max_entities: usize,
    /// Deepest level a node may be created at (root = 0).
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_entities: default_max_entities(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_entities() -> usize {
    3
}
fn default_max_depth() -> u32 {
    10
}
