use crate::domain::{is_valid_domain, normalize_domain};
use crate::models::{InvalidLead, Lead, ValidLead, ValidatedBatch, ValidationResult};

/// Validates a single lead, accumulating every violated rule.
///
/// On success the result carries a cleaned lead: every string field trimmed,
/// optional fields that trim to empty dropped, and the company domain
/// normalized to a bare hostname.
pub fn validate_lead(lead: &Lead, index: usize) -> ValidationResult {
    let mut errors = Vec::new();

    let first_name = lead.first_name.trim();
    if first_name.chars().count() < 2 {
        errors.push("firstName must be at least 2 characters".to_string());
    }

    let domain = normalize_domain(&lead.company_domain);
    if lead.company_domain.trim().is_empty() {
        errors.push("companyDomain is required".to_string());
    } else if !is_valid_domain(&domain) {
        errors.push(format!("companyDomain '{}' is not a valid domain", domain));
    }

    if !errors.is_empty() {
        return ValidationResult {
            index,
            is_valid: false,
            errors,
            cleaned: None,
        };
    }

    let cleaned = Lead {
        first_name: first_name.to_string(),
        last_name: trim_optional(&lead.last_name),
        company_domain: domain,
        company_name: trim_optional(&lead.company_name),
        company_industry: trim_optional(&lead.company_industry),
        company_size: trim_optional(&lead.company_size),
    };

    ValidationResult {
        index,
        is_valid: true,
        errors: Vec::new(),
        cleaned: Some(cleaned),
    }
}

/// Validates every lead in a list, partitioning into cleaned valid leads and
/// invalid leads that keep their original data and error list.
///
/// Relative order is preserved on both sides; each entry remembers its
/// position in the input.
pub fn validate_batch(leads: &[Lead]) -> ValidatedBatch {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for (index, lead) in leads.iter().enumerate() {
        let result = validate_lead(lead, index);
        match result.cleaned {
            Some(cleaned) => valid.push(ValidLead {
                index,
                lead: cleaned,
            }),
            None => invalid.push(InvalidLead {
                index,
                lead: lead.clone(),
                errors: result.errors,
            }),
        }
    }

    let pct = if leads.is_empty() {
        0.0
    } else {
        valid.len() as f64 / leads.len() as f64 * 100.0
    };
    tracing::info!(
        "Validated {} leads: {} valid ({:.1}%), {} invalid",
        leads.len(),
        valid.len(),
        pct,
        invalid.len()
    );

    ValidatedBatch { valid, invalid }
}

/// Trims an optional field, dropping values that trim to empty.
fn trim_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
