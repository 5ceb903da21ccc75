use reqwest::StatusCode;
use serde::Serialize;

use crate::client::{ChallengeClient, truncate_body};
use crate::error::Error;
use crate::registration::Registration;

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}

#[derive(Serialize)]
struct SubmissionRequest<'a> {
    #[serde(rename = "finalQuery")]
    final_query: &'a str,
}

impl ChallengeClient {
    /// POST the query to the registered webhook. The token goes into `Authorization` unchanged.
    pub async fn submit(
        &self,
        registration: &Registration,
        final_query: &str,
    ) -> Result<SubmissionReceipt, Error> {
        let resp = self
            .http
            .post(&registration.webhook_url)
            .header("Content-Type", "application/json")
            .header("Authorization", &registration.access_token)
            .json(&SubmissionRequest { final_query })
            .send()
            .await
            .map_err(|e| Error::Submission {
                status: None,
                message: format!("Webhook request failed: {e}"),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Submission {
                status: Some(status.as_u16()),
                message: format!("Failed to submit solution: {}", truncate_body(&text)),
            });
        }

        let body = resp.text().await.map_err(|e| Error::Submission {
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {e}"),
        })?;

        tracing::info!(response = %truncate_body(&body), "Solution submitted successfully");

        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
