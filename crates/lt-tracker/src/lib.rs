//! # lt-tracker
//!
//! Jira REST client for leadtime.
//!
//! Implements [`lt_core::IssueTracker`] against the Jira Server / Data Center
//! REST API v2 using a personal access token as a bearer credential:
//! - `GET /rest/api/2/myself` to verify reachability and credentials
//! - `GET /rest/api/2/issue/{key}?expand=changelog` for status histories
//!
//! Requests are never retried. Rate limiting and credential rejection are
//! surfaced as distinct [`TrackerError`] variants so callers can report them.

mod changelog;
mod error;
mod http;

pub use error::TrackerError;

use std::time::Duration;

use lt_config::TrackerConfig;
use lt_core::{IssueTracker, StatusChangeEvent};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::changelog::{IssueResponse, Myself, status_events};
use crate::http::expect_success;

/// REST path prefix shared by every request.
const API_PREFIX: &str = "rest/api/2";

/// HTTP client for a single Jira instance.
///
/// The bearer credential and timeout are fixed at construction; every
/// request goes through the same connection pool.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
}

impl JiraClient {
    /// Build a client from tracker settings.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidCredential`] if the token cannot be
    /// sent as a header, or [`TrackerError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token.trim()))
            .map_err(|_| TrackerError::InvalidCredential)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn myself_url(&self) -> String {
        format!("{}/{API_PREFIX}/myself", self.base_url)
    }

    fn issue_url(&self, issue_key: &str) -> String {
        format!(
            "{}/{API_PREFIX}/issue/{}?expand=changelog",
            self.base_url,
            urlencoding::encode(issue_key)
        )
    }
}

impl IssueTracker for JiraClient {
    type Error = TrackerError;

    async fn connect(&self) -> Result<(), TrackerError> {
        let url = self.myself_url();
        tracing::debug!(%url, "checking tracker credentials");

        let resp = expect_success(self.http.get(&url).send().await?, None).await?;
        let me: Myself = resp.json().await?;
        let user = me.display_name.or(me.name).unwrap_or_default();
        tracing::info!(base_url = %self.base_url, %user, "connected to tracker");
        Ok(())
    }

    async fn fetch_history(&self, issue_key: &str) -> Result<Vec<StatusChangeEvent>, TrackerError> {
        let url = self.issue_url(issue_key);
        tracing::debug!(issue = issue_key, %url, "fetching changelog");

        let resp = expect_success(self.http.get(&url).send().await?, Some(issue_key)).await?;

        let issue: IssueResponse = resp.json().await?;
        let events = status_events(issue)?;
        tracing::debug!(issue = issue_key, events = events.len(), "changelog fetched");
        Ok(events)
    }
}
