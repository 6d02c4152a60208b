//! # moderation-adapters
//!
//! HTTP implementation of `ContentClassifier` against an OpenAI-style
//! moderation endpoint: POST the text, read back a binary `flagged` verdict.
//! The service is a black box; the fail policy on errors lives with the
//! caller (the moderation gate), not here.

use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use domains::ContentClassifier;
use serde::{Deserialize, Serialize};

/// Moderation calls must not stall the send pipeline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpContentClassifier {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationVerdict>,
}

#[derive(Deserialize)]
struct ModerationVerdict {
    flagged: bool,
}

fn first_verdict(body: ModerationResponse) -> anyhow::Result<bool> {
    match body.results.first() {
        Some(verdict) => Ok(verdict.flagged),
        None => bail!("moderation response carried no verdict"),
    }
}

fn is_transient(err: &anyhow::Error) -> bool {
    err.downcast_ref::<reqwest::Error>()
        .is_some_and(|e| e.is_timeout() || e.is_connect())
}

impl HttpContentClassifier {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building moderation HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    async fn classify(&self, text: &str) -> anyhow::Result<bool> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ModerationRequest { input: text })
            .send()
            .await?
            .error_for_status()?;

        let body: ModerationResponse = response
            .json()
            .await
            .context("decoding moderation response")?;
        first_verdict(body)
    }
}

#[async_trait]
impl ContentClassifier for HttpContentClassifier {
    /// One retry on transport failure (timeout, refused connection) bounds
    /// the blast radius of network blips. Verdicts and HTTP-level errors are
    /// never retried.
    async fn is_flagged(&self, text: &str) -> anyhow::Result<bool> {
        match self.classify(text).await {
            Err(err) if is_transient(&err) => {
                tracing::warn!(error = %err, "moderation call failed, retrying once");
                self.classify(text).await
            }
            verdict => verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_is_read_from_the_first_result() {
        let body: ModerationResponse = serde_json::from_str(
            r#"{"results":[{"flagged":true,"categories":{"hate":true}}]}"#,
        )
        .unwrap();
        assert!(first_verdict(body).unwrap());

        let body: ModerationResponse =
            serde_json::from_str(r#"{"results":[{"flagged":false}]}"#).unwrap();
        assert!(!first_verdict(body).unwrap());
    }

    #[test]
    fn empty_result_list_is_an_error_not_a_pass() {
        let body: ModerationResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(first_verdict(body).is_err());
    }

    #[test]
    fn response_without_results_fails_to_decode() {
        assert!(serde_json::from_str::<ModerationResponse>(r#"{"ok":true}"#).is_err());
    }
}
