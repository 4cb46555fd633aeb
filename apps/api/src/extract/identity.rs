//! Identity extractor — name, email, and phone. Single-pass scans over the
//! whole document, independent of section segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Substrings that disqualify a line from being the candidate's name.
const NAME_STOPWORDS: &[&str] = &["@", "http", "resume", "cv", "email", "phone"];

/// Positional heuristic: the name is usually one of the first lines, short
/// but not too short, and free of contact/boilerplate markers.
pub fn extract_name(text: &str) -> Option<String> {
    for line in text.lines().take(5) {
        let trimmed = line.trim();
        let len = trimmed.chars().count();
        if len > 5 && len < 40 {
            let lowered = trimmed.to_lowercase();
            if !NAME_STOPWORDS.iter().any(|w| lowered.contains(w)) {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
