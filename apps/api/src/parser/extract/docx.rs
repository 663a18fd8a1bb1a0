use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::parser::error::ExtractError;
use crate::parser::extract::TextExtractor;
use crate::parser::format::FormatTag;

const DOCUMENT_PART: &str = "word/document.xml";

/// Cap on the inflated size of `word/document.xml`.
pub const DEFAULT_MAX_PART_BYTES: usize = 64 * 1024 * 1024;

/// Word-processor extraction: a DOCX file is a ZIP container whose body lives
/// in `word/document.xml`. Legacy binary `.doc` files are not ZIP archives and
/// fail to decode.
///
/// The body part is inflated through a hard byte limit, so a small compressed
/// upload cannot expand into an unbounded allocation.
pub struct DocxExtractor {
    max_part_bytes: usize,
}

impl DocxExtractor {
    pub fn new(max_part_bytes: usize) -> Self {
        Self { max_part_bytes }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PART_BYTES)
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::WordProcessor
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| decode_error(format!("failed to read DOCX container: {e}")))?;

        let part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| decode_error(format!("missing {DOCUMENT_PART}: {e}")))?;

        let limit = self.max_part_bytes as u64;
        if part.size() > limit {
            return Err(self.too_large());
        }

        // The declared size can lie; read one byte past the limit to detect overflow.
        let mut xml = String::new();
        part.take(limit + 1)
            .read_to_string(&mut xml)
            .map_err(|e| decode_error(format!("failed to read {DOCUMENT_PART}: {e}")))?;
        if xml.len() > self.max_part_bytes {
            return Err(self.too_large());
        }

        document_text(&xml)
    }
}

impl DocxExtractor {
    fn too_large(&self) -> ExtractError {
        decode_error(format!(
            "{DOCUMENT_PART} exceeds the {} byte limit",
            self.max_part_bytes
        ))
    }
}

/// Walks the document body collecting run text. Paragraph ends and explicit
/// breaks become newlines; tabs stay tabs.
fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e) | Event::Start(e)) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| decode_error(format!("bad text run: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(decode_error(format!(
                    "malformed XML at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    Ok(text)
}

fn decode_error(message: String) -> ExtractError {
    ExtractError::Decode {
        format: FormatTag::WordProcessor,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_with(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn body(paragraphs: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{paragraphs}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_extracts_paragraphs_as_lines() {
        let xml = body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Rust &amp; </w:t></w:r><w:r><w:t>Go</w:t></w:r></w:p>",
        );
        let bytes = docx_with(&[(DOCUMENT_PART, xml.as_str())]);
        let text = DocxExtractor::default().extract(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Go\n");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let xml = body(
            "<w:p><w:r><w:t>Email</w:t><w:tab/><w:t>a@b.io</w:t>\
             <w:br/><w:t>Phone</w:t></w:r></w:p>",
        );
        let bytes = docx_with(&[(DOCUMENT_PART, xml.as_str())]);
        assert_eq!(DocxExtractor::default().extract(&bytes).unwrap(), "Email\ta@b.io\nPhone\n");
    }

    #[test]
    fn test_ignores_non_run_text() {
        let xml = body(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr>\
             <w:r><w:t>Skills</w:t></w:r></w:p>",
        );
        let bytes = docx_with(&[(DOCUMENT_PART, xml.as_str())]);
        assert_eq!(DocxExtractor::default().extract(&bytes).unwrap(), "Skills\n");
    }

    #[test]
    fn test_not_a_zip_is_decode_error() {
        // Legacy .doc files start with the OLE2 signature, not a ZIP header.
        let ole = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0, 0, 0, 0];
        let err = DocxExtractor::default().extract(&ole).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Decode { format: FormatTag::WordProcessor, .. }
        ));
    }

    #[test]
    fn test_missing_document_part_is_decode_error() {
        let bytes = docx_with(&[("docProps/core.xml", "<cp:coreProperties/>")]);
        let err = DocxExtractor::default().extract(&bytes).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn test_oversized_document_part_is_rejected() {
        let runs = "<w:p><w:r><w:t>padding</w:t></w:r></w:p>".repeat(200);
        let xml = body(&runs);
        let bytes = docx_with(&[(DOCUMENT_PART, xml.as_str())]);

        let err = DocxExtractor::new(1024).extract(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Decode { format: FormatTag::WordProcessor, .. }
        ));
        assert!(err.to_string().contains("1024 byte limit"));

        let text = DocxExtractor::new(xml.len()).extract(&bytes).unwrap();
        assert!(text.starts_with("padding\n"));
    }

    #[test]
    fn test_empty_body_yields_empty_text() {
        let xml = body("<w:p/>");
        let bytes = docx_with(&[(DOCUMENT_PART, xml.as_str())]);
        assert_eq!(DocxExtractor::default().extract(&bytes).unwrap(), "");
    }
}
