use std::fmt;

/// Declared document format, derived from the locator's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Pdf,
    WordProcessor,
    Unknown,
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatTag::Pdf => "pdf",
            FormatTag::WordProcessor => "word_processor",
            FormatTag::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Maps a document locator to its declared format. Total: anything that is
/// not a recognised extension is `Unknown`.
pub fn detect(locator: &str) -> FormatTag {
    match extension(locator).as_deref() {
        Some("pdf") => FormatTag::Pdf,
        Some("doc" | "docx") => FormatTag::WordProcessor,
        _ => FormatTag::Unknown,
    }
}

/// Lower-cased extension of the last path segment, ignoring any query string.
fn extension(locator: &str) -> Option<String> {
    let path = locator.split_once('?').map_or(locator, |(path, _)| path);
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_case_insensitive() {
        assert_eq!(detect("a.PDF"), FormatTag::Pdf);
        assert_eq!(detect("a.pdf"), FormatTag::Pdf);
        assert_eq!(detect("https://cdn.example.com/cv/Resume.Pdf"), FormatTag::Pdf);
    }

    #[test]
    fn test_query_string_ignored() {
        assert_eq!(detect("a.pdf?x=1"), FormatTag::Pdf);
        assert_eq!(
            detect("https://bucket.s3.amazonaws.com/r.docx?X-Amz-Signature=abc.pdf"),
            FormatTag::WordProcessor
        );
    }

    #[test]
    fn test_word_processor_extensions() {
        assert_eq!(detect("cv.doc"), FormatTag::WordProcessor);
        assert_eq!(detect("cv.DOCX"), FormatTag::WordProcessor);
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(detect("a.xyz"), FormatTag::Unknown);
        assert_eq!(detect("resume"), FormatTag::Unknown);
        assert_eq!(detect(""), FormatTag::Unknown);
        assert_eq!(detect("https://example.com/files.pdf/resume"), FormatTag::Unknown);
        assert_eq!(detect("https://example.com/resume.pdf.txt"), FormatTag::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(FormatTag::WordProcessor.to_string(), "word_processor");
    }
}
