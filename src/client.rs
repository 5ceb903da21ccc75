use std::time::Duration;

use crate::error::Error;

/// Longest slice of a response body kept for logs and error messages.
pub(crate) const MAX_LOGGED_BODY: usize = 1024;

/// Shared HTTP client for both calls of a run.
pub struct ChallengeClient {
    pub(crate) http: reqwest::Client,
}

impl ChallengeClient {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Client(format!("Failed to build reqwest client: {e}")))?;
        Ok(Self { http })
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}
