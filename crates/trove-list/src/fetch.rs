//! Single-shot markdown fetch with typed failure classification.
//!
//! One GET, one hard deadline, no retries. Transport failures split into
//! timeout vs. other; non-2xx statuses map to fixed user-facing messages
//! via [`status_message`].

use std::time::Duration;

use reqwest::StatusCode;

use trove_config::FetchConfig;

use crate::error::ListError;

/// Fetch the markdown body at `url`.
///
/// # Errors
///
/// Returns [`ListError::Timeout`], [`ListError::Network`],
/// [`ListError::Http`], or [`ListError::EmptyContent`] per the failure
/// classification rules.
pub(crate) async fn fetch_markdown(url: &str, config: &FetchConfig) -> Result<String, ListError> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ListError::Network {
            message: e.to_string(),
        })?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "text/plain, text/markdown")
        .send()
        .await
        .map_err(|e| classify_transport_error(&e, url))?;

    let response = check_status(response)?;

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(&e, url))?;
    ensure_non_empty(body)
}

fn classify_transport_error(error: &reqwest::Error, url: &str) -> ListError {
    if error.is_timeout() {
        ListError::Timeout {
            url: url.to_string(),
        }
    } else {
        ListError::Network {
            message: error.to_string(),
        }
    }
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise maps the status
/// through [`status_message`].
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ListError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ListError::Http {
            status: status.as_u16(),
            message: status_message(status),
        })
    }
}

fn ensure_non_empty(body: String) -> Result<String, ListError> {
    if body.trim().is_empty() {
        Err(ListError::EmptyContent)
    } else {
        Ok(body)
    }
}

/// User-facing message for a non-success status code.
///
/// Statuses outside the table fall back to `HTTP {status}: {reason}`.
pub(crate) fn status_message(status: StatusCode) -> String {
    match status.as_u16() {
        404 => "File not found. Please check the URL and try again.".to_string(),
        403 => "Access forbidden. The repository may be private or rate limited.".to_string(),
        429 => "Rate limit exceeded. Please try again later.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        code => format!(
            "HTTP {code}: {}",
            status.canonical_reason().unwrap_or("Unknown Status")
        ),
    }
}
