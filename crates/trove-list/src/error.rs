//! Pipeline error types.
//!
//! Every failure in the pipeline is terminal for the call and carries a
//! message specific enough to show directly to an end user.

use thiserror::Error;

/// Errors raised while fetching and parsing an awesome list.
#[derive(Debug, Error)]
pub enum ListError {
    /// The input string is not a parseable URL.
    #[error("Invalid URL format: {url}")]
    InvalidUrl { url: String },

    /// The URL does not point at a recognized raw-content provider.
    #[error(
        "Unsupported host: {url}. Provide a raw GitHub or GitLab content URL, \
         e.g. https://raw.githubusercontent.com/user/repo/main/README.md"
    )]
    UnsupportedHost { url: String },

    /// A browsable github.com URL was given instead of the raw form.
    #[error(
        "Not a raw URL. Replace github.com with raw.githubusercontent.com \
         and drop the /blob segment, \
         e.g. https://raw.githubusercontent.com/user/repo/main/README.md"
    )]
    NotRawUrl,

    /// The fetch exceeded its deadline.
    #[error("Request timeout: {url} took too long to respond")]
    Timeout { url: String },

    /// Transport failure other than a timeout.
    #[error("Network error: {message}. Verify the URL is correct and reachable.")]
    Network { message: String },

    /// Non-2xx HTTP response. The message is chosen per status code.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Fetched body was empty or whitespace-only.
    #[error("Fetched content is empty")]
    EmptyContent,

    /// No second- or third-level headings found in the document.
    #[error("No markdown headings found. An awesome list needs '##' category sections.")]
    NoHeadings,

    /// No bullet link items found in the document.
    #[error("No list items found. An awesome list needs '- [title](url)' entries.")]
    NoListItems,

    /// A structurally valid document yielded zero resources.
    #[error("No resources could be extracted from the document")]
    NoResources,
}
