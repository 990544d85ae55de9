use crate::errors::{AppError, AppResult};

/// Returns true if the filename, content type, or magic bytes indicate a PDF.
/// Content-Type matching is case-insensitive and substring-based.
pub fn is_pdf(filename: &str, content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    filename.to_ascii_lowercase().ends_with(".pdf")
        || ct.contains("application/pdf")
        || head.starts_with(b"%PDF-")
}

/// Extracts plain text from in-memory PDF bytes. Encrypted, scanned, or
/// corrupted files surface as InvalidInput since the client controls the
/// upload.
pub fn extract_pdf_text(bytes: &[u8]) -> AppResult<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        AppError::InvalidInput(format!("failed to extract text from the uploaded PDF: {}", e))
    })?;

    if text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "No text found in the uploaded PDF.".to_string(),
        ));
    }

    Ok(text)
}
