use thiserror::Error;

/// Minimum trimmed length before a parsed document counts as readable. Guards
/// against image-only or scanned PDFs with no text layer.
pub const MIN_READABLE_CHARS: usize = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The buffer is empty or the parser could not read it as a document.
    #[error("invalid document buffer")]
    InvalidInput,
    /// Parsed fine but produced no usable text layer.
    #[error("no readable text in document")]
    UnreadableDocument,
}

/// Extract the text layer of a PDF and normalize it for skill extraction:
/// whitespace runs collapsed to single spaces, lowercased, trimmed.
///
/// No OCR fallback; a scanned document surfaces as `UnreadableDocument`.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    if bytes.is_empty() {
        return Err(DocumentError::InvalidInput);
    }

    let raw =
        pdf_extract::extract_text_from_mem(bytes).map_err(|_| DocumentError::InvalidInput)?;

    postprocess(&raw)
}

fn postprocess(raw: &str) -> Result<String, DocumentError> {
    if raw.trim().chars().count() < MIN_READABLE_CHARS {
        return Err(DocumentError::UnreadableDocument);
    }

    Ok(raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase())
}
