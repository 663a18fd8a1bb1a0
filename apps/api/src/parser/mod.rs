//! Resume parsing pipeline: detect → fetch → extract → analyze → score.
//!
//! The pipeline is stateless per call. `ResumeParser` only holds the shared,
//! immutable collaborators, so one instance serves concurrent requests.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod handlers;

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::{analyze, compute_match_score};
use crate::models::resume::ParsedResult;
use crate::parser::error::{ExtractError, ParseError, Stage};
use crate::parser::extract::ExtractorRegistry;
use crate::parser::fetch::DocumentFetcher;
use crate::parser::format::{detect, FormatTag};

pub struct ResumeParser {
    fetcher: Arc<dyn DocumentFetcher>,
    extractors: Arc<ExtractorRegistry>,
}

impl ResumeParser {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, extractors: ExtractorRegistry) -> Self {
        Self {
            fetcher,
            extractors: Arc::new(extractors),
        }
    }

    /// Parses the document behind `locator` and scores it against `requirements`.
    ///
    /// Any stage failure aborts the call; no partial result is returned.
    pub async fn parse(
        &self,
        locator: &str,
        requirements: &[String],
    ) -> Result<ParsedResult, ParseError> {
        let format = detect(locator);
        if format == FormatTag::Unknown {
            return Err(ParseError::UnsupportedFormat {
                stage: Stage::Detection,
                format,
            });
        }
        debug!("Detected {format} document at {locator}");

        let bytes = self.fetcher.fetch(locator).await?;

        let extractors = Arc::clone(&self.extractors);
        let text = tokio::task::spawn_blocking(move || extractors.extract(&bytes, format))
            .await
            .map_err(|e| {
                ParseError::Extraction(ExtractError::Decode {
                    format,
                    message: format!("decoder task failed: {e}"),
                })
            })??;

        if text.trim().is_empty() {
            return Err(ParseError::EmptyContent(Stage::Extraction));
        }

        let requirements = requirements.to_vec();
        let result = tokio::task::spawn_blocking(move || {
            let analysis = analyze(&text);
            let score = compute_match_score(&analysis.skills, &requirements);
            ParsedResult {
                skills: analysis.skills,
                experience: analysis.experience,
                education: analysis.education,
                email: analysis.email,
                phone: analysis.phone,
                score,
            }
        })
        .await
        .map_err(|e| ParseError::Analysis(format!("analysis task failed: {e}")))?;

        info!(
            "Parsed {format} resume: score={}, skills={}",
            result.score,
            result.skills.len()
        );
        Ok(result)
    }
}
