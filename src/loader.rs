// src/loader.rs
use crate::error::LoadError;
use crate::model::JobPosting;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// One-shot loader for the job listing endpoint.
///
/// Issues a single GET per session; there is no retry, no backoff and no
/// refresh. The client carries a request timeout so a sleeping upstream
/// cannot leave the UI in a perpetual loading state.
pub struct JobLoader {
    client: Client,
    endpoint: String,
}

impl JobLoader {
    pub fn new(endpoint: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the job list. The Content-Type request header carries no
    /// meaning on a bodyless GET but the upstream API expects it.
    pub async fn fetch(&self) -> std::result::Result<Vec<JobPosting>, LoadError> {
        info!("Fetching job listings from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Job API returned status {}", status);
            return Err(LoadError::BadStatus(status));
        }

        let jobs: Vec<JobPosting> = response.json().await?;

        info!("Loaded {} job postings", jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 1 on loopback is never listening, so the connect is refused
        // without leaving the machine.
        let loader = JobLoader::new("http://127.0.0.1:1/jobs", 1).unwrap();
        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(_)));
    }
}
