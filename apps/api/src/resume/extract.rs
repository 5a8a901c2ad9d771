//! PDF text extraction.
//!
//! Parsing is CPU-bound and `pdf-extract` may panic on hostile input, so the
//! work runs inside `spawn_blocking` and a panicked task is reported as a
//! decode failure instead of taking down the worker.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Uploaded file is not a PDF document")]
    NotPdf,

    #[error("Failed to decode PDF: {0}")]
    Malformed(String),

    #[error("PDF decoder crashed on this document")]
    DecoderPanicked,
}

/// Extracts the text of every page, concatenated in document order.
pub async fn extract_text(data: Bytes) -> Result<String, IngestError> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(IngestError::NotPdf);
    }

    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&data)
            .map_err(|e| IngestError::Malformed(e.to_string()))
    })
    .await
    .map_err(|_| IngestError::DecoderPanicked)??;

    debug!("Extracted text from {} page(s)", pages.len());
    Ok(pages.concat())
}
