use regex::Regex;

/// Normalizes a raw company-domain string to a lower-cased bare hostname.
///
/// Accepts the messy values found in lead exports: full URLs, `www.`
/// prefixes, trailing paths and port numbers. Purely syntactic; no DNS
/// lookup is performed. The result is a fixed point: normalizing it again
/// returns the same string.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut domain = lowered.as_str();

    // Prefixes can stack in dirty data ("http://www.www.acme.com")
    loop {
        let stripped = domain
            .strip_prefix("http://")
            .or_else(|| domain.strip_prefix("https://"))
            .or_else(|| domain.strip_prefix("www."));
        match stripped {
            Some(rest) => domain = rest,
            None => break,
        }
    }

    let domain = domain.split('/').next().unwrap_or(domain);
    let domain = domain.split(':').next().unwrap_or(domain);

    domain.trim().to_string()
}

/// Checks whether a (normalized) domain string is syntactically plausible.
///
/// Requires at least two dot-separated labels, a final label of two or more
/// alphabetic characters, and an overall length of at least 4.
pub fn is_valid_domain(domain: &str) -> bool {
    // Basic checks
    if domain.len() < 4 || !domain.contains('.') {
        return false;
    }

    let domain_regex = Regex::new(
        r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,}$",
    )
    .unwrap();

    if !domain_regex.is_match(domain) {
        tracing::debug!("Invalid domain format: {}", domain);
        return false;
    }

    true
}
