use crate::client::ChallengeClient;
use crate::config::Config;
use crate::error::Error;
use crate::query;
use crate::submission::SubmissionReceipt;

/// Register, pick the query, submit. Stops at the first failing step.
pub async fn run(config: &Config) -> Result<SubmissionReceipt, Error> {
    let client = ChallengeClient::new(config.http_timeout)?;

    let registration = client
        .register(&config.registration_url, &config.identity)
        .await?;
    tracing::info!(stage = "registered", "Registration complete");

    let final_query = query::select_query(&config.identity.reg_no)?;
    tracing::info!(stage = "query_selected", "Query selected");

    let receipt = client.submit(&registration, final_query).await?;
    tracing::info!(stage = "submitted", status = receipt.status, "Submission complete");

    Ok(receipt)
}
