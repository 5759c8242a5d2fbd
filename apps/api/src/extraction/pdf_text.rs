use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// True when the payload starts with the PDF file signature.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Decodes the text layer of a PDF. Scanned (image-only) documents come back
/// as empty text, which the extractor turns into an all-defaults portfolio.
///
/// Blocking and CPU-bound: call from `spawn_blocking`.
pub fn decode_pdf(bytes: &[u8]) -> Result<String, AppError> {
    if !looks_like_pdf(bytes) {
        return Err(AppError::UnprocessableEntity(
            "Uploaded file is not a valid PDF document".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF text: {e}")))?;

    debug!(bytes = bytes.len(), chars = text.len(), "Decoded PDF text layer");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_check() {
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"PK\x03\x04 not a pdf"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn test_non_pdf_bytes_are_unprocessable() {
        let err = decode_pdf(b"plain text resume").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
