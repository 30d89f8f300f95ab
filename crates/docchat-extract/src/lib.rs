//! Document text extraction for docchat.
//!
//! Converts uploaded PDF, DOCX, and TXT files into plain text. Extraction
//! is fully in-memory: readers operate on the uploaded bytes, so there is
//! no temporary state to clean up on any exit path.

mod batch;
mod document;
mod docx;
mod format;
mod pdf;

pub use batch::{process_documents, BatchOutcome, FileReport};
pub use document::UploadedDocument;
pub use format::DocumentFormat;

/// Extraction failure taxonomy.
///
/// `UnsupportedFormat` skips a file; the content errors abort extraction
/// for that file only. None of these are fatal to a processing batch.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("pdf extraction failed: {0}")]
    Pdf(String),

    #[error("docx extraction failed: {0}")]
    Docx(String),

    #[error("text file is not valid utf-8: {0}")]
    Encoding(String),
}

/// Extract plain text from a single uploaded document.
///
/// The format is taken from the document's declared extension; content that
/// cannot be read as that format is an error, never silently empty text.
pub fn extract_text(doc: &UploadedDocument) -> Result<String, ExtractError> {
    match DocumentFormat::from_name(&doc.name)? {
        DocumentFormat::Pdf => pdf::extract(&doc.bytes),
        DocumentFormat::Docx => docx::extract(&doc.bytes),
        DocumentFormat::Txt => extract_txt(&doc.bytes),
    }
}

/// Decode TXT bytes as strict UTF-8.
fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Encoding(e.to_string()))
}
