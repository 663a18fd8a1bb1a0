use std::collections::BTreeSet;

/// Score reported when the caller supplies no requirements to compare against.
pub const DEFAULT_SCORE: u32 = 50;

/// Computes a 0–100 match score of extracted skills against job requirements.
///
/// A requirement counts as matched (at most once) when, after trimming and
/// lower-casing, it equals a skill, is a substring of a skill, or contains a
/// skill. Score = floor(matched / total * 100).
///
/// Substring matching means a very short requirement such as `"r"` matches
/// many skills; this is a known accuracy limitation of the keyword scorer.
pub fn compute_match_score<S: AsRef<str>>(skills: &BTreeSet<String>, requirements: &[S]) -> u32 {
    if requirements.is_empty() {
        return DEFAULT_SCORE;
    }

    let skills_lower: BTreeSet<String> = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let matched = requirements
        .iter()
        .map(|r| r.as_ref().trim().to_lowercase())
        .filter(|req| requirement_matches(req, &skills_lower))
        .count();

    let score = (matched * 100) / requirements.len();
    score.min(100) as u32
}

fn requirement_matches(requirement: &str, skills_lower: &BTreeSet<String>) -> bool {
    skills_lower.contains(requirement)
        || skills_lower
            .iter()
            .any(|skill| skill.contains(requirement) || requirement.contains(skill.as_str()))
}
