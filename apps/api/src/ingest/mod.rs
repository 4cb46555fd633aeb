//! Document ingestion — everything that happens before the extraction
//! engine sees text: download, format sniffing, and byte-stream decoding.

pub mod docx;
pub mod fetch;
pub mod pdf;

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

const PDF_MAGIC: &[u8] = b"%PDF";
/// DOCX files are ZIP containers.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Sniffs the document format from its magic bytes.
pub fn detect_format(bytes: &[u8]) -> Option<DocumentFormat> {
    if bytes.starts_with(PDF_MAGIC) {
        Some(DocumentFormat::Pdf)
    } else if bytes.starts_with(ZIP_MAGIC) {
        Some(DocumentFormat::Docx)
    } else {
        None
    }
}

/// Fallback when the magic bytes are inconclusive: trust the upstream
/// `Content-Type` header.
pub fn format_from_content_type(content_type: &str) -> Option<DocumentFormat> {
    let lowered = content_type.to_lowercase();
    if lowered.contains("pdf") {
        Some(DocumentFormat::Pdf)
    } else if lowered.contains("word") || lowered.contains("docx") {
        Some(DocumentFormat::Docx)
    } else {
        None
    }
}

/// Decodes document bytes into plain text lines.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes),
        DocumentFormat::Docx => docx::extract_text(bytes),
    }
}
