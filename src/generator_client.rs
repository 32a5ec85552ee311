use crate::config::Config;
use crate::errors::AppError;
use crate::models::{BatchEnrichResponse, GeneratedEmailResponse, HealthResponse, Lead};
use std::time::Duration;

/// Client for the remote email generation service.
///
/// Covers the full service contract: the health probe, the batch enrichment
/// endpoint, and the single-lead generation endpoint.
#[derive(Clone)]
pub struct GeneratorClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    /// Creates a new `GeneratorClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the generation service.
    /// * `timeout` - Per-request deadline applied to every call.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create generator client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from pipeline configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Pre-flight liveness probe of the generation service.
    ///
    /// Returns true iff `GET /health` answers with a success status and a
    /// parseable body. Never retries; the caller decides what to do when the
    /// service is down.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<HealthResponse>().await {
                    Ok(health) => {
                        tracing::info!("✓ Email API is healthy: {}", health.message);
                        true
                    }
                    Err(e) => {
                        tracing::error!("Email API health response unparseable: {}", e);
                        false
                    }
                }
            }
            Ok(response) => {
                tracing::error!("Email API health check failed: {}", response.status());
                false
            }
            Err(e) => {
                tracing::error!("Email API is not accessible: {}", e);
                false
            }
        }
    }

    /// Submits one chunk of cleaned leads to the batch enrichment endpoint.
    ///
    /// # Arguments
    ///
    /// * `leads` - The chunk, sent as a JSON array body.
    ///
    /// # Returns
    ///
    /// * `Result<BatchEnrichResponse, AppError>` - The parsed batch response.
    pub async fn enrich_batch(&self, leads: &[Lead]) -> Result<BatchEnrichResponse, AppError> {
        let url = format!("{}/enrich-leads-batch", self.base_url);
        tracing::debug!("POST {} ({} leads)", url, leads.len());

        let response = self
            .client
            .post(&url)
            .json(leads)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Batch request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Email API returned {}: {}",
                status, error_text
            )));
        }

        let result: BatchEnrichResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse batch response: {}", e))
        })?;

        Ok(result)
    }

    /// Generates an email for a single lead.
    ///
    /// Ad-hoc counterpart of `enrich_batch`, used for manual testing.
    pub async fn generate_email(&self, lead: &Lead) -> Result<GeneratedEmailResponse, AppError> {
        let url = format!("{}/generate-email", self.base_url);
        tracing::debug!("POST {} for {}", url, lead.first_name);

        let response = self
            .client
            .post(&url)
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalApiError(format!("Generate-email request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Email API returned {}: {}",
                status, error_text
            )));
        }

        let result: GeneratedEmailResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse generate-email response: {}", e))
        })?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = GeneratorClient::new(
            "http://localhost:8000/".to_string(),
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url, "http://localhost:8000");
    }
}
