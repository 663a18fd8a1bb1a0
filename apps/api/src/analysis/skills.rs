use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::analysis::keywords::SKILL_KEYWORDS;

/// Vocabulary paired with its lower-cased form, computed once.
static SKILL_VOCABULARY: Lazy<Vec<(&'static str, String)>> =
    Lazy::new(|| lowercase_pairs(SKILL_KEYWORDS));

/// Returns every known skill label whose text occurs anywhere in `text`,
/// compared case-insensitively.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    match_vocabulary(text, &SKILL_VOCABULARY)
}

fn match_vocabulary(text: &str, vocabulary: &[(&str, String)]) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|(_, needle)| !needle.is_empty() && text_lower.contains(needle.as_str()))
        .map(|(label, _)| (*label).to_string())
        .collect()
}

fn lowercase_pairs<'a>(labels: &[&'a str]) -> Vec<(&'a str, String)> {
    labels.iter().map(|l| (*l, l.to_lowercase())).collect()
}
