use super::ExtractError;

/// Extracts text from a PDF held fully in memory.
/// `pdf-extract` can panic on malformed input; the caller runs this on the
/// blocking pool, where a panic turns into a `JoinError`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if !bytes.starts_with(b"%PDF-") {
        return Err(ExtractError::Pdf("missing %PDF- header".to_string()));
    }
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
