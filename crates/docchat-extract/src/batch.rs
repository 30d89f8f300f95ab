//! Batch document processing.

use tracing::{info, warn};

use crate::{extract_text, ExtractError, UploadedDocument};

/// Per-file outcome of a processing batch.
#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    /// Extracted text length in bytes, or why the file contributed nothing.
    pub result: Result<usize, ExtractError>,
}

/// Result of processing a batch of uploads.
///
/// `combined_text` holds the text of every successfully extracted document,
/// each under a separator header naming its source file.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub combined_text: String,
    pub reports: Vec<FileReport>,
}

impl BatchOutcome {
    /// Files that contributed no text, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ExtractError)> {
        self.reports
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.name.as_str(), e)))
    }

    pub fn extracted_count(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_ok()).count()
    }
}

fn document_header(name: &str) -> String {
    format!("\n\n--- Document: {name} ---\n")
}

/// Extract every document in order, collecting per-file outcomes.
///
/// Failures never abort the batch: an unsupported or unreadable file is
/// recorded in its report and processing continues with the rest. The
/// worst outcome is empty combined text plus failure reports.
pub fn process_documents(documents: &[UploadedDocument]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for doc in documents {
        info!(name = %doc.name, "processing document");
        match extract_text(doc) {
            Ok(text) => {
                outcome.combined_text.push_str(&document_header(&doc.name));
                outcome.combined_text.push_str(&text);
                outcome.reports.push(FileReport {
                    name: doc.name.clone(),
                    result: Ok(text.len()),
                });
            }
            Err(e) => {
                warn!(name = %doc.name, error = %e, "document skipped");
                outcome.reports.push(FileReport {
                    name: doc.name.clone(),
                    result: Err(e),
                });
            }
        }
    }

    outcome
}
