//! Document format detection.

use crate::ExtractError;

/// The upload formats docchat can extract text from.
///
/// Dispatch on file type is a closed enum so the unsupported case is
/// handled exhaustively instead of by string comparison at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Extensions accepted by the upload boundary.
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = ["pdf", "docx", "txt"];

    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Result<Self, ExtractError> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::Txt),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Detect the format from a file name's declared extension.
    ///
    /// A name without a dot is treated as its own extension, so it surfaces
    /// in the unsupported-format report verbatim.
    pub fn from_name(name: &str) -> Result<Self, ExtractError> {
        let ext = name.rsplit_once('.').map(|(_, e)| e).unwrap_or(name);
        Self::from_extension(ext)
    }
}
