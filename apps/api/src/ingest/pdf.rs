use anyhow::{anyhow, Result};

/// Decodes a PDF byte stream into its plain text.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow!("failed to extract text from PDF: {e}"))
}
