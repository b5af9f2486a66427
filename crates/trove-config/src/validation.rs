//! Structural validation thresholds.
//!
//! Only the advisory warning thresholds live here; the fatal pre-check
//! rules (headings present, list items present) are not configurable.

use serde::{Deserialize, Serialize};

/// Content length below which a short-content warning is logged.
const fn default_min_content_len() -> usize {
    500
}

/// Bullet-link count below which a low-link warning is logged.
const fn default_min_link_count() -> usize {
    5
}

/// Minimum length for a paragraph to qualify as the list description.
const fn default_min_description_len() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Warn when the fetched document is shorter than this many characters.
    #[serde(default = "default_min_content_len")]
    pub min_content_len: usize,

    /// Warn when fewer than this many bullet links are found.
    #[serde(default = "default_min_link_count")]
    pub min_link_count: usize,

    /// Paragraphs at or below this length never become the list description.
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_content_len: default_min_content_len(),
            min_link_count: default_min_link_count(),
            min_description_len: default_min_description_len(),
        }
    }
}
