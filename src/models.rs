use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Lead Models ============

/// A candidate contact record (person + company) to be enriched with a
/// business email address.
///
/// Identity is the lead's position in the original input sequence; there is
/// no separate ID field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// First name of the person. Required, minimum 2 characters after trimming.
    pub first_name: String,
    /// Last name of the person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Company domain (e.g. "acme.com"). Normalized to a bare hostname.
    pub company_domain: String,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Industry type (e.g. "Technology").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_industry: Option<String>,
    /// Company size bucket (e.g. "51-200").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
}

// ============ Validation Models ============

/// Outcome of validating a single lead.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Position of the lead in the original input sequence.
    pub index: usize,
    /// Whether the lead passed every validation rule.
    pub is_valid: bool,
    /// Every violated rule, in the order the rules are checked.
    pub errors: Vec<String>,
    /// The cleaned lead. Present only when `is_valid` is true.
    pub cleaned: Option<Lead>,
}

/// A cleaned lead that passed validation, paired with its input position.
#[derive(Debug, Clone)]
pub struct ValidLead {
    pub index: usize,
    pub lead: Lead,
}

/// A lead that failed validation, kept (pre-clean) for reconciliation.
#[derive(Debug, Clone)]
pub struct InvalidLead {
    pub index: usize,
    pub lead: Lead,
    pub errors: Vec<String>,
}

/// Result of partitioning a list of leads by validity.
///
/// Both sides preserve the relative order of the input.
#[derive(Debug)]
pub struct ValidatedBatch {
    pub valid: Vec<ValidLead>,
    pub invalid: Vec<InvalidLead>,
}

// ============ Enrichment Models ============

/// A lead plus the email data attached by the generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedLead {
    #[serde(flatten)]
    pub lead: Lead,
    /// Best generated email address, if one could be produced.
    #[serde(default)]
    pub generated_email: Option<String>,
    /// Confidence in the generated email, in [0, 1].
    #[serde(default)]
    pub email_confidence: f64,
    /// Pattern behind the generated email (e.g. "firstname.lastname").
    #[serde(default)]
    pub email_pattern: Option<String>,
    /// Human-readable explanation: success reasoning or failure cause.
    #[serde(default)]
    pub email_reasoning: String,
    /// All candidate addresses, ranked by confidence.
    #[serde(default)]
    pub email_candidates: Vec<String>,
}

/// An enriched lead paired with its original input position.
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub index: usize,
    pub data: EnrichedLead,
}

/// How a lead was handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    /// The lead went through the enrichment stage (possibly degraded).
    Completed,
    /// The lead was rejected by validation and never sent to the service.
    ValidationFailed,
}

// ============ Verification Models ============

/// Verdict of the post-hoc verification pass for one enriched lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Unverified,
    NoEmail,
}

/// Verification outcome attached to an enriched lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerification {
    pub email_verified: bool,
    pub email_verification_status: VerificationStatus,
    pub email_verification_reason: String,
}

// ============ Final Output Models ============

/// Final per-lead record: exactly one is emitted for every input lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Position of the lead in the original input sequence.
    pub index: usize,
    #[serde(flatten)]
    pub enriched: EnrichedLead,
    pub processing_status: ProcessingStatus,
    /// Validation errors; empty (and omitted) for completed leads.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<String>,
    /// Present only when the verification stage ran; a `None` here emits no
    /// verification keys at all.
    #[serde(flatten)]
    pub verification: Option<EmailVerification>,
}

/// Summary statistics for one enrichment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    pub total_leads: usize,
    pub valid_leads: usize,
    pub valid_pct: f64,
    pub emails_generated: usize,
    pub generated_pct_of_total: f64,
    pub generated_pct_of_valid: f64,
    /// Successful generations as reported by the service.
    pub successful_generations: usize,
    /// Failed generations: service-reported plus locally degraded leads.
    pub failed_generations: usize,
    pub completed_at: DateTime<Utc>,
}

/// Complete pipeline output: one record per input lead plus run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalResults {
    pub results: Vec<LeadRecord>,
    pub summary: EnrichmentSummary,
}

// ============ Remote Service Contract ============

/// Response body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Response body of `POST /generate-email`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedEmailResponse {
    #[serde(default)]
    pub generated_email: Option<String>,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub pattern_used: Option<String>,
    #[serde(default)]
    pub all_candidates: Vec<String>,
}

/// Response body of `POST /enrich-leads-batch`.
///
/// Older service builds return the enriched list under `results` instead of
/// `enriched_leads`; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEnrichResponse {
    pub success: bool,
    #[serde(default)]
    pub enriched_leads: Option<Vec<EnrichedLead>>,
    #[serde(default)]
    pub results: Option<Vec<EnrichedLead>>,
    #[serde(default)]
    pub successful_generations: usize,
    #[serde(default)]
    pub failed_generations: usize,
}

impl BatchEnrichResponse {
    /// Extracts the enriched-lead list, preferring `enriched_leads` over the
    /// legacy `results` key.
    pub fn take_leads(self) -> Option<Vec<EnrichedLead>> {
        self.enriched_leads.or(self.results)
    }
}
