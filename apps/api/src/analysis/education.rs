use once_cell::sync::Lazy;

use crate::analysis::keywords::{DEGREE_KEYWORDS, FIELD_KEYWORDS};

static DEGREES: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| lowercased(DEGREE_KEYWORDS));
static FIELDS: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| lowercased(FIELD_KEYWORDS));

/// Describes the highest-priority degree and field of study mentioned in `text`.
///
/// Each keyword list is searched in its own order; list position breaks ties,
/// not position in the document.
pub fn extract_education(text: &str) -> String {
    let text_lower = text.to_lowercase();
    let degree = first_listed(&DEGREES, &text_lower);
    let field = first_listed(&FIELDS, &text_lower);

    match (degree, field) {
        (Some(degree), Some(field)) => format!("{degree} in {field}"),
        (Some(degree), None) => degree.to_string(),
        (None, Some(field)) => format!("Degree in {field}"),
        (None, None) => String::new(),
    }
}

fn first_listed(keywords: &[(&'static str, String)], text_lower: &str) -> Option<&'static str> {
    keywords
        .iter()
        .find(|(_, needle)| text_lower.contains(needle.as_str()))
        .map(|(label, _)| *label)
}

fn lowercased(labels: &[&'static str]) -> Vec<(&'static str, String)> {
    labels.iter().map(|l| (*l, l.to_lowercase())).collect()
}
