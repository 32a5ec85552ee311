use serde::Deserialize;

/// Static configuration for the enrichment pipeline.
///
/// All values are fixed at startup; there is no dynamic reconfiguration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the email generation service.
    pub api_base_url: String,
    /// Number of leads submitted per remote call.
    pub batch_size: usize,
    /// Delay between consecutive batch calls, in milliseconds.
    pub batch_delay_ms: u64,
    /// Per-request deadline for remote calls, in seconds.
    pub request_timeout_secs: u64,
    /// Whether the post-hoc verification pass runs over enriched leads.
    pub verify_emails: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_base_url: std::env::var("EMAIL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string())
                .trim()
                .to_string(),
            batch_size: std::env::var("BATCH_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("BATCH_SIZE must be a valid number"))?,
            batch_delay_ms: std::env::var("BATCH_DELAY_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("BATCH_DELAY_MS must be a valid number"))?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a valid number"))?,
            verify_emails: std::env::var("VERIFY_EMAILS")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };

        if config.api_base_url.is_empty() {
            anyhow::bail!("EMAIL_API_URL cannot be empty");
        }
        if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
        {
            anyhow::bail!("EMAIL_API_URL must start with http:// or https://");
        }
        // The generation service rejects batches larger than 1000 leads.
        if config.batch_size == 0 || config.batch_size > 1000 {
            anyhow::bail!("BATCH_SIZE must be between 1 and 1000");
        }
        if config.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be at least 1");
        }

        // Log successful configuration load
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Email API URL: {}", config.api_base_url);
        tracing::debug!(
            "Batch size: {}, delay: {}ms, timeout: {}s",
            config.batch_size,
            config.batch_delay_ms,
            config.request_timeout_secs
        );
        if config.verify_emails {
            tracing::info!("Email verification pass enabled");
        }

        Ok(config)
    }
}
