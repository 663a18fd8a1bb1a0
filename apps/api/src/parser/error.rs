use std::fmt;

use thiserror::Error;

use crate::parser::format::FormatTag;

/// Pipeline stage a failure originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detection,
    Retrieval,
    Extraction,
    Analysis,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Detection => "detection",
            Stage::Retrieval => "retrieval",
            Stage::Extraction => "extraction",
            Stage::Analysis => "analysis",
        };
        f.write_str(name)
    }
}

/// Failure of a text extractor.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(FormatTag),

    #[error("failed to decode {format} document: {message}")]
    Decode { format: FormatTag, message: String },

    #[error("no text content found in {0} document")]
    Empty(FormatTag),
}

/// Failure of a document fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad status: {0}")]
    Status(u16),

    #[error("document exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// Terminal failure of a resume parse. Every variant names the stage it came from.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("[{stage}] unsupported file type: {format} (must be PDF or DOC/DOCX)")]
    UnsupportedFormat { stage: Stage, format: FormatTag },

    #[error("[retrieval] failed to download document: {0}")]
    Retrieval(#[source] FetchError),

    #[error("[extraction] {0}")]
    Extraction(#[source] ExtractError),

    #[error("[{0}] no text content extracted from document")]
    EmptyContent(Stage),

    #[error("[analysis] {0}")]
    Analysis(String),
}

impl ParseError {
    pub fn stage(&self) -> Stage {
        match self {
            ParseError::UnsupportedFormat { stage, .. } => *stage,
            ParseError::Retrieval(_) => Stage::Retrieval,
            ParseError::Extraction(_) => Stage::Extraction,
            ParseError::EmptyContent(stage) => *stage,
            ParseError::Analysis(_) => Stage::Analysis,
        }
    }
}

impl From<FetchError> for ParseError {
    fn from(e: FetchError) -> Self {
        ParseError::Retrieval(e)
    }
}

impl From<ExtractError> for ParseError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFormat(format) => ParseError::UnsupportedFormat {
                stage: Stage::Extraction,
                format,
            },
            ExtractError::Empty(_) => ParseError::EmptyContent(Stage::Extraction),
            other => ParseError::Extraction(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extractor_output_maps_to_empty_content() {
        let err: ParseError = ExtractError::Empty(FormatTag::Pdf).into();
        assert!(matches!(err, ParseError::EmptyContent(Stage::Extraction)));
    }

    #[test]
    fn test_decode_failure_keeps_cause() {
        let err: ParseError = ExtractError::Decode {
            format: FormatTag::WordProcessor,
            message: "invalid Zip archive".to_string(),
        }
        .into();
        assert_eq!(err.stage(), Stage::Extraction);
        assert!(err.to_string().contains("invalid Zip archive"));
        assert!(err.to_string().starts_with("[extraction]"));
    }

    #[test]
    fn test_retrieval_stage_in_message() {
        let err: ParseError = FetchError::Status(404).into();
        assert_eq!(err.stage(), Stage::Retrieval);
        assert_eq!(
            err.to_string(),
            "[retrieval] failed to download document: bad status: 404"
        );
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = ParseError::UnsupportedFormat {
            stage: Stage::Detection,
            format: FormatTag::Unknown,
        };
        assert_eq!(
            err.to_string(),
            "[detection] unsupported file type: unknown (must be PDF or DOC/DOCX)"
        );
    }
}
