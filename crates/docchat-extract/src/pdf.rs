//! PDF text extraction.

use crate::ExtractError;

/// Extract page-ordered text from PDF bytes.
///
/// A corrupt document aborts extraction for the whole file; there is no
/// per-page recovery.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_pdf_is_an_error() {
        let err = extract(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn truncated_header_is_an_error() {
        let err = extract(b"%PDF-1.4\ngarbage").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
