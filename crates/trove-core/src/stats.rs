//! Aggregate statistics over a finished parse.

use std::collections::BTreeSet;

use crate::{AwesomeList, Origin};

/// Counts and percentages logged at the end of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    /// Total resources extracted.
    pub resources: usize,
    /// Distinct category names.
    pub categories: usize,
    /// Distinct tag strings across all resources.
    pub tags: usize,
    /// Percentage of resources hosted on GitHub, rounded to an integer.
    pub github_pct: u8,
    /// Percentage of resources hosted on GitLab, rounded to an integer.
    pub gitlab_pct: u8,
}

impl ListStats {
    #[must_use]
    pub fn for_list(list: &AwesomeList) -> Self {
        let categories: BTreeSet<&str> =
            list.resources.iter().map(|r| r.category.as_str()).collect();
        let tags: BTreeSet<&str> = list
            .resources
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .collect();
        let github = list
            .resources
            .iter()
            .filter(|r| Origin::from_url(&r.url) == Some(Origin::GitHub))
            .count();
        let gitlab = list
            .resources
            .iter()
            .filter(|r| Origin::from_url(&r.url) == Some(Origin::GitLab))
            .count();

        Self {
            resources: list.resources.len(),
            categories: categories.len(),
            tags: tags.len(),
            github_pct: percentage(github, list.resources.len()),
            gitlab_pct: percentage(gitlab, list.resources.len()),
        }
    }
}

/// Integer percentage rounded half-up. Zero when the total is zero.
fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (count * 100 + total / 2) / total;
    u8::try_from(pct).unwrap_or(100)
}
