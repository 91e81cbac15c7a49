//! Plain-text extraction from PDF byte streams.

use std::panic::{self, AssertUnwindSafe};

use crate::{GleanError, Result};

/// Extracts the text of every page from an in-memory PDF.
///
/// Image-only documents yield little or no text since no OCR is attempted.
/// The underlying parser occasionally panics on hostile input; that is
/// reported as [`GleanError::PdfParseError`] like any other parse failure.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

    match outcome {
        Ok(Ok(text)) => {
            tracing::debug!(bytes = bytes.len(), chars = text.len(), "pdf text extracted");
            Ok(text)
        }
        Ok(Err(e)) => Err(GleanError::PdfParseError(e.to_string())),
        Err(payload) => Err(GleanError::PdfParseError(panic_message(payload.as_ref()))),
    }
}

/// Returns true if the body starts with the `%PDF-` magic.
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(b"%PDF-")
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "PDF parser aborted".to_string()
    }
}
