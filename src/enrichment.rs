/// Batched enrichment pipeline.
///
/// This module provides the stages of the enrichment workflow:
/// 1. Health-check the generation service
/// 2. Validate and clean the input leads
/// 3. Enrich valid leads in fixed-size batches (degrading failed batches)
/// 4. Optionally verify generated emails
/// 5. Reconcile everything into one final result set
use crate::config::Config;
use crate::errors::AppError;
use crate::generator_client::GeneratorClient;
use crate::models::{
    EnrichedLead, EnrichedRecord, FinalResults, GeneratedEmailResponse, Lead, ValidLead,
};
use crate::reconcile::create_final_results;
use crate::validator::validate_batch;
use crate::verification::{verify_enriched_leads, ConfidenceVerifier};
use std::time::Duration;

/// Outcome of the batch enrichment stage.
///
/// Carries exactly one enriched record per input lead, in input order up to
/// intra-batch reordering by the service.
#[derive(Debug)]
pub struct BatchOutcome {
    pub enriched: Vec<EnrichedRecord>,
    /// Successful generations reported by the service.
    pub successful_generations: usize,
    /// Service-reported failures plus locally degraded leads.
    pub failed_generations: usize,
}

impl BatchOutcome {
    fn empty() -> Self {
        Self {
            enriched: Vec::new(),
            successful_generations: 0,
            failed_generations: 0,
        }
    }
}

/// Builds one degraded enrichment record per lead in a failed chunk.
///
/// The failure cause is embedded in the reasoning field; email fields are
/// nulled out and the candidate list is empty.
pub fn fallback_records(chunk: &[ValidLead], cause: &str) -> Vec<EnrichedRecord> {
    chunk
        .iter()
        .map(|valid| EnrichedRecord {
            index: valid.index,
            data: EnrichedLead {
                lead: valid.lead.clone(),
                generated_email: None,
                email_confidence: 0.0,
                email_pattern: None,
                email_reasoning: cause.to_string(),
                email_candidates: Vec::new(),
            },
        })
        .collect()
}

/// Enriches validated leads in fixed-size batches.
///
/// Batches are processed strictly sequentially, one remote call per batch,
/// with a configurable delay between consecutive calls (but not after the
/// last). A batch failure of any kind (transport error, non-2xx status,
/// `success: false`, or a malformed response) never aborts the run: that
/// batch alone degrades to fallback records and processing continues.
///
/// Empty input returns an empty outcome without any remote call.
pub async fn enrich_leads_with_emails(
    client: &GeneratorClient,
    config: &Config,
    valid_leads: &[ValidLead],
) -> BatchOutcome {
    if valid_leads.is_empty() {
        return BatchOutcome::empty();
    }

    tracing::info!(
        "🚀 Starting email enrichment for {} leads",
        valid_leads.len()
    );

    let batch_size = config.batch_size.max(1);
    let total_batches = valid_leads.len().div_ceil(batch_size);

    let mut enriched: Vec<EnrichedRecord> = Vec::with_capacity(valid_leads.len());
    let mut successful_generations = 0usize;
    let mut failed_generations = 0usize;

    for (batch_index, chunk) in valid_leads.chunks(batch_size).enumerate() {
        let batch_number = batch_index + 1;
        tracing::info!(
            "📦 Processing batch {}/{} ({} leads)",
            batch_number,
            total_batches,
            chunk.len()
        );

        let leads: Vec<Lead> = chunk.iter().map(|valid| valid.lead.clone()).collect();

        match client.enrich_batch(&leads).await {
            Ok(response) if response.success => {
                let reported_successes = response.successful_generations;
                let reported_failures = response.failed_generations;

                match response.take_leads() {
                    // The service must echo one record per submitted lead;
                    // anything else would break the coverage invariant.
                    Some(batch_leads) if batch_leads.len() == chunk.len() => {
                        for (valid, data) in chunk.iter().zip(batch_leads) {
                            enriched.push(EnrichedRecord {
                                index: valid.index,
                                data,
                            });
                        }
                        successful_generations += reported_successes;
                        failed_generations += reported_failures;
                        tracing::info!(
                            "✅ Batch {} completed: {}/{} emails generated",
                            batch_number,
                            reported_successes,
                            chunk.len()
                        );
                    }
                    Some(batch_leads) => {
                        let cause = format!(
                            "API Error: response contained {} records for {} leads",
                            batch_leads.len(),
                            chunk.len()
                        );
                        tracing::error!("❌ Batch {} failed: {}", batch_number, cause);
                        enriched.extend(fallback_records(chunk, &cause));
                        failed_generations += chunk.len();
                    }
                    None => {
                        let cause = "API Error: response missing enriched leads".to_string();
                        tracing::error!("❌ Batch {} failed: {}", batch_number, cause);
                        enriched.extend(fallback_records(chunk, &cause));
                        failed_generations += chunk.len();
                    }
                }
            }
            Ok(_) => {
                let cause = "API Error: batch processing failed (success=false)".to_string();
                tracing::error!("❌ Batch {} failed: {}", batch_number, cause);
                enriched.extend(fallback_records(chunk, &cause));
                failed_generations += chunk.len();
            }
            Err(e) => {
                let cause = format!("API Error: {}", e);
                tracing::error!("❌ Batch {} failed: {}", batch_number, cause);
                enriched.extend(fallback_records(chunk, &cause));
                failed_generations += chunk.len();
            }
        }

        // Bound the request rate between batches, but don't sleep after the last
        if batch_number < total_batches {
            tokio::time::sleep(Duration::from_millis(config.batch_delay_ms)).await;
        }
    }

    tracing::info!(
        "Enrichment stage finished: {} successful, {} failed generations",
        successful_generations,
        failed_generations
    );

    BatchOutcome {
        enriched,
        successful_generations,
        failed_generations,
    }
}

/// Runs the complete enrichment workflow over a list of leads.
///
/// This is the main entry point that orchestrates the entire process:
/// health gate, validation, batched enrichment (or local degradation when
/// the service is down), the optional verification pass, and reconciliation.
///
/// Never fails: every input lead comes back exactly once, tagged with a
/// processing status, with all failure information embedded in per-record
/// reasoning fields.
pub async fn enrich_leads_workflow(
    client: &GeneratorClient,
    config: &Config,
    leads: &[Lead],
) -> FinalResults {
    if leads.is_empty() {
        return create_final_results(BatchOutcome::empty(), None, &[], leads);
    }

    let healthy = client.check_health().await;
    let validated = validate_batch(leads);

    let outcome = if healthy {
        enrich_leads_with_emails(client, config, &validated.valid).await
    } else {
        tracing::warn!("⚠ Email API is not available, continuing without enrichment");
        let failed = validated.valid.len();
        BatchOutcome {
            enriched: fallback_records(&validated.valid, "Email API not available"),
            successful_generations: 0,
            failed_generations: failed,
        }
    };

    let verifications = if config.verify_emails {
        let verifier = ConfidenceVerifier::default();
        Some(verify_enriched_leads(&verifier, &outcome.enriched))
    } else {
        None
    };

    create_final_results(outcome, verifications, &validated.invalid, leads)
}

/// Utility to test the generation service with a single ad-hoc lead.
///
/// Builds a probe lead (industry defaults to "Technology") and logs the
/// generated email, confidence, pattern, and candidate count.
pub async fn test_single_lead(
    client: &GeneratorClient,
    first_name: &str,
    last_name: Option<&str>,
    company_domain: &str,
    company_industry: Option<&str>,
) -> Result<GeneratedEmailResponse, AppError> {
    let lead = Lead {
        first_name: first_name.to_string(),
        last_name: last_name.map(str::to_string),
        company_domain: company_domain.to_string(),
        company_name: None,
        company_industry: Some(company_industry.unwrap_or("Technology").to_string()),
        company_size: Some("51-200".to_string()),
    };

    let result = client.generate_email(&lead).await?;

    tracing::info!(
        "🧪 Test results for {} {}: email={:?}, confidence={:.1}%, pattern={:?}, {} candidates",
        first_name,
        last_name.unwrap_or(""),
        result.generated_email,
        result.confidence_score * 100.0,
        result.pattern_used,
        result.all_candidates.len()
    );

    Ok(result)
}
