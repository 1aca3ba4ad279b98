//! Domain name canonicalization and wildcard fallback candidates.

/// Lower-cases a name and guarantees the trailing root label.
///
/// `"Example.COM"` and `"example.com."` both become `"example.com."`.
pub fn normalize_domain(domain: &str) -> String {
    let mut normalized = domain.trim().to_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

/// Wildcard names to try, in order, when `domain` has no exact match.
///
/// Labels are peeled from the left one at a time: `a.b.c.` yields `*.b.c.` then `*.c.`.
/// A bare `*.` root wildcard is never produced. Input must already be normalized.
pub fn wildcard_candidates(domain: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut rest = domain;

    while let Some((_, parent)) = rest.split_once('.') {
        if parent.is_empty() {
            break;
        }
        candidates.push(format!("*.{}", parent));
        rest = parent;
    }

    candidates
}
