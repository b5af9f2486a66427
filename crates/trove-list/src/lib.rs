//! # trove-list
//!
//! Fetches a raw awesome-list README and parses it into structured
//! [`AwesomeList`] data: URL validation, a single HTTP fetch, a structural
//! pre-check, then one walk over the markdown tree. No retries, no caches,
//! no partial results. Every failure is terminal and typed as a
//! [`ListError`].

mod assemble;
mod error;
mod fetch;
mod item;
mod meta;
mod structure;
mod tags;
mod text;
mod url;
mod walk;

pub use error::ListError;
pub use url::{derive_repo_url, validate_raw_url};

use std::time::Instant;

use trove_config::{TroveConfig, ValidationConfig};
use trove_core::{AwesomeList, ListStats};

/// Fetch and parse an awesome list from a raw-content URL.
///
/// # Errors
///
/// Returns the first [`ListError`] hit along the pipeline: URL validation,
/// transport or HTTP status failures, an empty body, a failed structural
/// pre-check, or a walk that extracted nothing.
pub async fn fetch_awesome_list(url: &str, config: &TroveConfig) -> Result<AwesomeList, ListError> {
    let started = Instant::now();
    tracing::info!(url, "fetching awesome list");

    let result = run(url, config).await;
    let elapsed_ms = started.elapsed().as_millis();
    match &result {
        Ok(list) => {
            let stats = ListStats::for_list(list);
            tracing::info!(
                resources = stats.resources,
                categories = stats.categories,
                tags = stats.tags,
                github_pct = stats.github_pct,
                gitlab_pct = stats.gitlab_pct,
                elapsed_ms,
                "parse complete"
            );
        }
        Err(e) => {
            tracing::error!(url, %e, elapsed_ms, "parse failed");
        }
    }
    result
}

async fn run(url: &str, config: &TroveConfig) -> Result<AwesomeList, ListError> {
    url::validate_raw_url(url)?;
    let markdown = fetch::fetch_markdown(url, &config.fetch).await?;
    tracing::info!(len = markdown.len(), "content fetched");
    parse_document(&markdown, url, &config.validation)
}

/// Parse markdown that has already been fetched.
///
/// `source_url` is only string-transformed into the repository URL; no
/// network access happens here.
///
/// # Errors
///
/// Returns [`ListError::NoHeadings`] or [`ListError::NoListItems`] when the
/// text fails the structural pre-check, and [`ListError::NoResources`] when
/// the walk finishes without extracting a single resource.
pub fn parse_document(
    markdown: &str,
    source_url: &str,
    config: &ValidationConfig,
) -> Result<AwesomeList, ListError> {
    for warning in structure::precheck(markdown, config)? {
        tracing::warn!(%warning, "structure pre-check");
    }
    let outline = walk::walk_document(markdown);
    if outline.resources.is_empty() {
        return Err(ListError::NoResources);
    }
    Ok(assemble::assemble(outline, source_url, config))
}
