//! Turns fetched document bytes into normalized plain text. One extractor per
//! supported format, selected through a registry keyed by [`FormatTag`].

pub mod docx;
pub mod pdf;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::parser::error::ExtractError;
use crate::parser::format::FormatTag;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

/// Decodes raw document bytes of one format into best-effort plain text.
///
/// Implementations return the decoder's raw text; the registry applies
/// normalization and the empty-content check uniformly.
pub trait TextExtractor: Send + Sync {
    fn format(&self) -> FormatTag;

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Immutable table of extraction strategies, built once at startup.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<FormatTag, Arc<dyn TextExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
            .with(Arc::new(PdfExtractor))
            .with(Arc::new(DocxExtractor::default()))
    }
}

impl ExtractorRegistry {
    /// An empty registry; every format is unsupported until registered.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    pub fn with(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractors.insert(extractor.format(), extractor);
        self
    }

    /// Extracts canonical text from `bytes` declared as `format`.
    ///
    /// `Unknown` (or any unregistered format) is rejected without touching a
    /// decoder. Text that normalizes to nothing is `ExtractError::Empty`.
    pub fn extract(&self, bytes: &[u8], format: FormatTag) -> Result<String, ExtractError> {
        if format == FormatTag::Unknown {
            return Err(ExtractError::UnsupportedFormat(format));
        }
        let extractor = self
            .extractors
            .get(&format)
            .ok_or(ExtractError::UnsupportedFormat(format))?;

        let raw = extractor.extract(bytes)?;
        let text = normalize_text(&raw);
        debug!(
            "Extracted {} chars ({} lines) from {format} document",
            text.len(),
            text.lines().count()
        );

        if text.is_empty() {
            return Err(ExtractError::Empty(format));
        }
        Ok(text)
    }
}

/// Canonical text: whitespace-trimmed, non-empty lines joined by single newlines.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
