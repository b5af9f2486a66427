//! Raw-content URL validation and repository URL derivation.
//!
//! Validation is purely syntactic; no network access happens here. Host
//! matching is substring-based over the whole URL, which mirrors how the
//! two raw-content hosting conventions are recognized in practice.

use crate::error::ListError;

const RAW_GITHUB_HOST: &str = "raw.githubusercontent.com";

/// Check that `raw_url` is a raw GitHub/GitLab content URL.
///
/// # Errors
///
/// - [`ListError::InvalidUrl`] when the string does not parse as a URL.
/// - [`ListError::UnsupportedHost`] when no recognized provider appears.
/// - [`ListError::NotRawUrl`] when a browsable github.com URL is given.
pub fn validate_raw_url(raw_url: &str) -> Result<(), ListError> {
    if ::url::Url::parse(raw_url).is_err() {
        return Err(ListError::InvalidUrl {
            url: raw_url.to_string(),
        });
    }

    let recognized = raw_url.contains(RAW_GITHUB_HOST)
        || raw_url.contains("github.com")
        || raw_url.contains("gitlab.com");
    if !recognized {
        return Err(ListError::UnsupportedHost {
            url: raw_url.to_string(),
        });
    }

    // A github.com/.../blob/... URL serves rendered HTML, not the file text.
    if raw_url.contains("github.com") && !raw_url.contains(RAW_GITHUB_HOST) {
        return Err(ListError::NotRawUrl);
    }

    Ok(())
}

/// Derive the hosting repository's web URL from a raw-content URL.
///
/// `raw.githubusercontent.com/{owner}/{repo}/{branch}/...` becomes
/// `github.com/{owner}/{repo}`; GitLab raw URLs are cut at the `/-/raw/`
/// (or legacy `/raw/`) segment. Unrecognized forms pass through unchanged.
#[must_use]
pub fn derive_repo_url(raw_url: &str) -> String {
    if let Some(rest) = raw_url.split("raw.githubusercontent.com/").nth(1) {
        let mut parts = rest.splitn(3, '/');
        if let (Some(owner), Some(repo)) = (parts.next(), parts.next()) {
            return format!("https://github.com/{owner}/{repo}");
        }
    }

    if let Some(rest) = raw_url.split("gitlab.com/").nth(1) {
        let project = rest.split("/-/raw/").next().unwrap_or(rest);
        let project = project.split("/raw/").next().unwrap_or(project);
        return format!("https://gitlab.com/{project}");
    }

    raw_url.to_string()
}
