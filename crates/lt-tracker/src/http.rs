//! Status-code handling for Jira responses.
//!
//! Every request funnels its response through [`expect_success`]. Jira
//! reports failures as `{"errorMessages": [...], "errors": {...}}`; when that
//! shape is present its messages become the error text, otherwise the raw
//! body is used.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::TrackerError;

/// Wait reported for a 429 without a numeric `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const MAX_MESSAGE_CHARS: usize = 200;

#[derive(serde::Deserialize)]
struct JiraErrorBody {
    #[serde(rename = "errorMessages", default)]
    error_messages: Vec<String>,
}

/// Pass a 2xx response through, or turn the status into a [`TrackerError`].
///
/// `issue_key` names the issue an issue-scoped request was for, so a 404
/// becomes [`TrackerError::IssueNotFound`]. Without it a 404 is an
/// ordinary [`TrackerError::Api`] error (for example a wrong base URL).
pub(crate) async fn expect_success(
    resp: reqwest::Response,
    issue_key: Option<&str>,
) -> Result<reqwest::Response, TrackerError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let error = match (status, issue_key) {
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => TrackerError::Unauthorized {
            status: status.as_u16(),
        },
        (StatusCode::NOT_FOUND, Some(key)) => TrackerError::IssueNotFound(key.to_string()),
        (StatusCode::TOO_MANY_REQUESTS, _) => TrackerError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        },
        _ => TrackerError::Api {
            status: status.as_u16(),
            message: error_message(&resp.text().await.unwrap_or_default()),
        },
    };
    Err(error)
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Readable text for an error body, capped at 200 characters.
fn error_message(body: &str) -> String {
    let text = serde_json::from_str::<JiraErrorBody>(body)
        .ok()
        .filter(|parsed| !parsed.error_messages.is_empty())
        .map_or_else(
            || body.trim().to_string(),
            |parsed| parsed.error_messages.join("; "),
        );
    match text.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}
