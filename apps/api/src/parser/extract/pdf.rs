use std::panic;

use tracing::{debug, warn};

use crate::parser::error::ExtractError;
use crate::parser::extract::TextExtractor;
use crate::parser::format::FormatTag;

/// PDF text extraction, best-effort per page.
///
/// `pdf-extract` gives the best text layout but fails (or panics) on the whole
/// document if any page trips it up. When that happens the document is reopened
/// with `lopdf` and each page is extracted on its own, skipping pages that fail.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let attempt = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
        let first_pass = match attempt {
            Ok(Ok(pages)) => {
                let numbered = pages.into_iter().zip(1u32..).map(|(text, n)| (n, Ok(text)));
                return join_pages(numbered).ok_or(ExtractError::Empty(FormatTag::Pdf));
            }
            Ok(Err(e)) => e.to_string(),
            Err(_) => "decoder panicked".to_string(),
        };
        debug!("pdf-extract failed ({first_pass}); retrying page by page");

        let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractError::Decode {
            format: FormatTag::Pdf,
            message: format!("{first_pass}; {e}"),
        })?;

        let pages = doc.get_pages().into_keys().map(|n| {
            let text = doc.extract_text(&[n]).map_err(|e| e.to_string());
            (n, text)
        });
        join_pages(pages).ok_or(ExtractError::Empty(FormatTag::Pdf))
    }
}

/// Concatenates per-page text, skipping pages that failed or were blank.
/// `None` when no page produced any text.
fn join_pages<I>(pages: I) -> Option<String>
where
    I: IntoIterator<Item = (u32, Result<String, String>)>,
{
    let mut text = String::new();
    for (page, result) in pages {
        match result {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => debug!("PDF page {page} has no text"),
            Err(e) => warn!("Skipping PDF page {page}: {e}"),
        }
    }
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a minimal PDF with one Courier page per entry. A `None` entry
    /// is a page whose `/Contents` points at an object that does not exist.
    fn pdf_with_pages(lines: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for line in lines {
            let contents = match line {
                Some(line) => {
                    let content = Content {
                        operations: vec![
                            Operation::new("BT", vec![]),
                            Operation::new("Tf", vec!["F1".into(), 12.into()]),
                            Operation::new("Td", vec![72.into(), 700.into()]),
                            Operation::new("Tj", vec![Object::string_literal(*line)]),
                            Operation::new("ET", vec![]),
                        ],
                    };
                    let stream = Stream::new(dictionary! {}, content.encode().unwrap());
                    Object::Reference(doc.add_object(stream))
                }
                None => Object::Reference((9999, 0)),
            };
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => contents,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn single_page_pdf(line: &str) -> Vec<u8> {
        pdf_with_pages(&[Some(line)])
    }

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let bytes = single_page_pdf("Rust engineer");
        let text = PdfExtractor.extract(&bytes).unwrap();
        assert!(text.contains("Rust"), "got {text:?}");
    }

    #[test]
    fn test_garbage_bytes_are_decode_error() {
        let err = PdfExtractor.extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Decode { format: FormatTag::Pdf, .. }));
    }

    #[test]
    fn test_broken_page_falls_back_to_per_page_extraction() {
        let bytes = pdf_with_pages(&[None, Some("Second page Kubernetes")]);
        let text = PdfExtractor.extract(&bytes).unwrap();
        assert!(text.contains("Second page Kubernetes"), "got {text:?}");
    }

    #[test]
    fn test_join_pages_skips_failed_and_blank_pages() {
        let pages = vec![
            (1, Err("bad content stream".to_string())),
            (2, Ok("Page two".to_string())),
            (3, Ok("   ".to_string())),
            (4, Ok("Page four".to_string())),
        ];
        assert_eq!(join_pages(pages).unwrap(), "Page two\nPage four\n");
    }

    #[test]
    fn test_join_pages_none_when_every_page_fails() {
        let pages = vec![(1, Err("broken".to_string())), (2, Ok(String::new()))];
        assert!(join_pages(pages).is_none());
    }
}
