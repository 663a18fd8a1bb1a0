use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern families in priority order. The first family with any match wins,
/// and within it the first occurrence in the document.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)([0-9]+)\+?\s*years?\s+(?:of\s+)?experience",
        r"(?i)experience:\s*([0-9]+)\+?\s*years?",
        r"(?i)([0-9]+)\+?\s*years?\s+(?:in|of|with)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Infers years of experience, formatted as `"1 year"` or `"<N>+ years"`.
/// Returns an empty string when no pattern matches.
pub fn extract_experience(text: &str) -> String {
    EXPERIENCE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|years| format_years(years.as_str()))
        .unwrap_or_default()
}

fn format_years(years: &str) -> String {
    if years == "1" {
        "1 year".to_string()
    } else {
        format!("{years}+ years")
    }
}
