use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap());

/// Phone pattern families in priority order: generalized international/local,
/// parenthesized area code, plain triplet.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\(?\+?[0-9]{1,3}[\s-]?\(?[0-9]{2,3}\)?[\s-]?[0-9]{3,4}[\s-]?[0-9]{4}",
        r"\([0-9]{3}\)\s*[0-9]{3}[-\s]?[0-9]{4}",
        r"[0-9]{3}[-\s]?[0-9]{3}[-\s]?[0-9]{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// First email address in document order, or an empty string.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone number found by the highest-priority pattern family that
/// matches anywhere, or an empty string.
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
