use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Resource;

/// The complete parse result for one awesome-list document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwesomeList {
    /// List title from the first `# Awesome ...` heading, or a fallback.
    pub title: String,
    /// Intro paragraph, or a topic-derived default when none qualifies.
    pub description: String,
    /// Web URL of the hosting repository, derived from the raw-content URL.
    pub repo_url: String,
    /// Extracted resources, in document order.
    pub resources: Vec<Resource>,
}
