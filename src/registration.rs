use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::{ChallengeClient, truncate_body};
use crate::config::Identity;
use crate::error::Error;

/// Webhook URL and access token issued by the registration endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    #[serde(rename = "webhook")]
    pub webhook_url: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[derive(Serialize)]
struct RegistrationRequest<'a> {
    name: &'a str,
    #[serde(rename = "regNo")]
    reg_no: &'a str,
    email: &'a str,
}

impl ChallengeClient {
    /// POST the identity to `url` and read back the webhook and token.
    pub async fn register(&self, url: &str, identity: &Identity) -> Result<Registration, Error> {
        let body = RegistrationRequest {
            name: &identity.name,
            reg_no: &identity.reg_no,
            email: &identity.email,
        };

        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Registration(format!("Registration request failed: {e}")))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Registration(format!(
                "Failed to generate webhook. Status code: {}: {}",
                status.as_u16(),
                truncate_body(&text)
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| Error::Registration(format!("Failed to read response body: {e}")))?;

        let registration = parse_registration(&text)?;
        tracing::info!(webhook = %registration.webhook_url, "Webhook generated successfully");
        Ok(registration)
    }
}

fn parse_registration(text: &str) -> Result<Registration, Error> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::Registration(format!("Invalid JSON in registration response: {e}")))?;

    serde_json::from_value(value)
        .map_err(|e| Error::Registration(format!("Unexpected registration response: {e}")))
}
