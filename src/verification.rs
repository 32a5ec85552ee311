use crate::models::{EmailVerification, EnrichedLead, EnrichedRecord, VerificationStatus};

/// Contract for post-hoc verification of a generated email.
///
/// Input is one enriched lead, output is a verification outcome; no other
/// side effects. Implementations backed by SMTP probing or a third-party
/// verification API plug in behind this same contract.
pub trait EmailVerifier {
    fn verify(&self, lead: &EnrichedLead) -> EmailVerification;
}

/// Confidence-threshold verifier.
///
/// Placeholder policy: a generated email with confidence above the threshold
/// counts as verified. Swap in a real verification service for production
/// use.
pub struct ConfidenceVerifier {
    pub threshold: f64,
}

impl Default for ConfidenceVerifier {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

impl EmailVerifier for ConfidenceVerifier {
    fn verify(&self, lead: &EnrichedLead) -> EmailVerification {
        match &lead.generated_email {
            None => EmailVerification {
                email_verified: false,
                email_verification_status: VerificationStatus::NoEmail,
                email_verification_reason: "No generated email to verify".to_string(),
            },
            Some(email) => {
                if lead.email_confidence > self.threshold {
                    tracing::debug!(
                        "✓ {} verified (confidence {:.2})",
                        email,
                        lead.email_confidence
                    );
                    EmailVerification {
                        email_verified: true,
                        email_verification_status: VerificationStatus::Verified,
                        email_verification_reason: format!(
                            "Confidence {:.2} above threshold {:.2}",
                            lead.email_confidence, self.threshold
                        ),
                    }
                } else {
                    EmailVerification {
                        email_verified: false,
                        email_verification_status: VerificationStatus::Unverified,
                        email_verification_reason: format!(
                            "Confidence {:.2} at or below threshold {:.2}",
                            lead.email_confidence, self.threshold
                        ),
                    }
                }
            }
        }
    }
}

/// Applies a verifier to every enriched lead, in order.
pub fn verify_enriched_leads(
    verifier: &dyn EmailVerifier,
    records: &[EnrichedRecord],
) -> Vec<EmailVerification> {
    let outcomes: Vec<EmailVerification> = records
        .iter()
        .map(|record| verifier.verify(&record.data))
        .collect();

    let verified = outcomes.iter().filter(|o| o.email_verified).count();
    tracing::info!(
        "Verification pass: {}/{} emails verified",
        verified,
        outcomes.len()
    );

    outcomes
}
