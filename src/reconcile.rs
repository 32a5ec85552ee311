/// Merges enriched and invalid leads back into one complete output.
///
/// The final sequence carries exactly one record per original input lead:
/// enriched leads first (tagged completed), then validation failures
/// (tagged validation_failed), each rebuilt from the original pre-clean
/// lead with email fields nulled out.
use crate::enrichment::BatchOutcome;
use crate::models::{
    EmailVerification, EnrichedLead, EnrichmentSummary, FinalResults, InvalidLead, Lead,
    LeadRecord, ProcessingStatus,
};
use chrono::Utc;

/// Builds the final result set and its summary statistics.
///
/// # Arguments
///
/// * `outcome` - Output of the batch enrichment stage.
/// * `verifications` - Per-enriched-lead verification outcomes, present only
///   when the verification stage ran; must be parallel to `outcome.enriched`.
/// * `invalid` - Leads rejected by validation.
/// * `original_leads` - The untouched input list, used to rebuild invalid
///   records from their pre-clean data.
pub fn create_final_results(
    outcome: BatchOutcome,
    verifications: Option<Vec<EmailVerification>>,
    invalid: &[InvalidLead],
    original_leads: &[Lead],
) -> FinalResults {
    let total_leads = original_leads.len();
    let valid_leads = outcome.enriched.len();
    let mut results = Vec::with_capacity(total_leads);

    let verifications: Vec<Option<EmailVerification>> = match verifications {
        Some(outcomes) => outcomes.into_iter().map(Some).collect(),
        None => vec![None; outcome.enriched.len()],
    };

    for (record, verification) in outcome.enriched.into_iter().zip(verifications) {
        results.push(LeadRecord {
            index: record.index,
            enriched: record.data,
            processing_status: ProcessingStatus::Completed,
            validation_errors: Vec::new(),
            verification,
        });
    }

    for entry in invalid {
        let original = original_leads
            .get(entry.index)
            .cloned()
            .unwrap_or_else(|| entry.lead.clone());

        results.push(LeadRecord {
            index: entry.index,
            enriched: EnrichedLead {
                lead: original,
                generated_email: None,
                email_confidence: 0.0,
                email_pattern: None,
                email_reasoning: format!("Validation failed: {}", entry.errors.join("; ")),
                email_candidates: Vec::new(),
            },
            processing_status: ProcessingStatus::ValidationFailed,
            validation_errors: entry.errors.clone(),
            verification: None,
        });
    }

    let emails_generated = results
        .iter()
        .filter(|r| r.enriched.generated_email.is_some())
        .count();

    let summary = EnrichmentSummary {
        total_leads,
        valid_leads,
        valid_pct: pct(valid_leads, total_leads),
        emails_generated,
        generated_pct_of_total: pct(emails_generated, total_leads),
        generated_pct_of_valid: pct(emails_generated, valid_leads),
        successful_generations: outcome.successful_generations,
        failed_generations: outcome.failed_generations,
        completed_at: Utc::now(),
    };

    tracing::info!(
        "📊 Email Enrichment Summary: {} total, {} valid ({:.1}%), {} emails generated ({:.1}% of total, {:.1}% of valid)",
        summary.total_leads,
        summary.valid_leads,
        summary.valid_pct,
        summary.emails_generated,
        summary.generated_pct_of_total,
        summary.generated_pct_of_valid
    );

    FinalResults { results, summary }
}

fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
