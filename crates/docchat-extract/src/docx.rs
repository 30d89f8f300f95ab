//! DOCX text extraction.
//!
//! A .docx file is a zip archive with the body text in
//! `word/document.xml`. The markup is flattened rather than fully parsed:
//! paragraph and break closes become newlines, remaining tags are
//! stripped, and the five standard XML entities are decoded.

use std::io::{Cursor, Read};

use crate::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract paragraph text from DOCX bytes, one line per paragraph.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a zip archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("unreadable {DOCUMENT_PART}: {e}")))?;

    Ok(xml_to_text(&xml))
}

/// Flatten WordprocessingML into plain text.
fn xml_to_text(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");

    let mut result = String::with_capacity(with_breaks.len());
    let mut in_tag = false;

    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    let decoded = decode_xml_entities(&result);
    decoded
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
