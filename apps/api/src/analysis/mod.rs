//! Stateless, rule-based extraction over canonical resume text: skills,
//! experience, education, and contact details.
//!
//! Five independent extractors (skills, experience, education, email, phone)
//! plus the requirement match scorer. All patterns run on the `regex` crate,
//! which guarantees linear-time matching.

pub mod contact;
pub mod education;
pub mod experience;
pub mod keywords;
pub mod scoring;
pub mod skills;

use std::collections::BTreeSet;

pub use contact::{extract_email, extract_phone};
pub use education::extract_education;
pub use experience::extract_experience;
pub use scoring::compute_match_score;
pub use skills::extract_skills;

/// Everything the analyzer pulls out of a document, before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    pub skills: BTreeSet<String>,
    pub experience: String,
    pub education: String,
    pub email: String,
    pub phone: String,
}

/// Runs all five extractors over the same text.
pub fn analyze(text: &str) -> TextAnalysis {
    TextAnalysis {
        skills: extract_skills(text),
        experience: extract_experience(text),
        education: extract_education(text),
        email: extract_email(text),
        phone: extract_phone(text),
    }
}
