//! Entry splitter — turns a section's raw text into candidate entry spans.
//!
//! Kind-specific anchor patterns mark where a new entry *starts*; the text
//! is cut immediately before each anchor match and the anchor is never
//! consumed, so the uncut spans always partition the section text exactly.
//! Filtering then drops leftover header fragments and folds spans too short
//! to stand alone (a lone "2019" or "2020 - Present" line) into the entry
//! above them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::classifier::SectionKind;

/// Degree tokens. They anchor education entry starts here and identify the
/// degree field in the field extractor.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.tech", "m.tech", "b.e", "m.e", "mba", "b.sc", "m.sc",
    "b.com", "m.com", "b.a", "m.a",
];

const EDUCATION_MIN_ENTRY_LEN: usize = 10;
const EXPERIENCE_MIN_ENTRY_LEN: usize = 15;
const PROJECTS_MIN_ENTRY_LEN: usize = 15;

/// Education entries start at a line opening with a 4-digit year or a
/// degree keyword.
static EDUCATION_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    let degrees = DEGREE_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?mi)^(?:\d{{4}}|(?:{degrees})\b)")).unwrap()
});

/// Month-year, year-year, and year-to-present ranges. Also reused by the
/// field extractor for the duration field.
pub(crate) static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]* \d{4}\s*[-–—]\s*(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]* \d{4}|\b\d{4}\s*[-–—]\s*\d{4}|\b\d{4}\s*[-–—]\s*(?:present|current|now)\b",
    )
    .unwrap()
});

/// Fallback experience anchor: any line containing a 4-digit year in
/// 1900–2099.
static YEAR_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^\n]*\b(?:19|20)\d{2}\b").unwrap());

/// Project entries start at a bulleted, numbered, or `word:`-labelled line.
static PROJECT_ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:•|\*|-|\d+\.|\d+\)|\w+:)").unwrap());

fn min_entry_len(kind: SectionKind) -> usize {
    match kind {
        SectionKind::Education => EDUCATION_MIN_ENTRY_LEN,
        SectionKind::Experience => EXPERIENCE_MIN_ENTRY_LEN,
        SectionKind::Projects => PROJECTS_MIN_ENTRY_LEN,
    }
}

/// Byte offsets where a new entry begins. Offset 0 never cuts: the first
/// span always starts at the top of the section.
fn cut_points(kind: SectionKind, raw: &str) -> Vec<usize> {
    let starts = |re: &Regex| -> Vec<usize> {
        re.find_iter(raw)
            .map(|m| m.start())
            .filter(|&s| s > 0)
            .collect()
    };
    match kind {
        SectionKind::Education => starts(&EDUCATION_ANCHOR_RE),
        SectionKind::Experience => {
            let primary = starts(&DATE_RANGE_RE);
            if primary.is_empty() {
                starts(&YEAR_LINE_RE)
            } else {
                primary
            }
        }
        SectionKind::Projects => starts(&PROJECT_ANCHOR_RE),
    }
}

/// Cuts `raw` before every anchor. The returned spans concatenate back to
/// `raw` exactly.
pub fn split_spans(kind: SectionKind, raw: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut prev = 0;
    for cut in cut_points(kind, raw) {
        spans.push(&raw[prev..cut]);
        prev = cut;
    }
    spans.push(&raw[prev..]);
    spans
}

/// Splits and filters: header-label fragments are dropped; spans below the
/// kind's length floor never stand alone. A sub-floor span that directly
/// follows a kept span extends it; any other is dropped.
pub fn entries(kind: SectionKind, raw: &str) -> Vec<&str> {
    let floor = min_entry_len(kind);
    let mut kept: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for span in split_spans(kind, raw) {
        let end = start + span.len();
        let trimmed = span.trim();
        if kind
            .header_labels()
            .contains(&trimmed.to_lowercase().as_str())
        {
            start = end;
            continue;
        }
        if trimmed.chars().count() < floor {
            if let Some(last) = kept.last_mut() {
                if last.1 == start {
                    last.1 = end;
                }
            }
            start = end;
            continue;
        }
        kept.push((start, end));
        start = end;
    }
    kept.into_iter().map(|(s, e)| &raw[s..e]).collect()
}
