//! Field extractor — ordered pattern lists per entry kind, first match wins.
//!
//! Every rule either yields a trimmed non-empty value or falls through to
//! the next rule; a field with no matching rule gets its sentinel. An entry
//! whose defining fields are all absent produces no record at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::entries::{DATE_RANGE_RE, DEGREE_KEYWORDS};
use crate::models::resume::{EducationRecord, ExperienceRecord, ProjectRecord};

pub const DEGREE_SENTINEL: &str = "Degree not specified";
pub const INSTITUTION_SENTINEL: &str = "Institution not specified";
pub const YEAR_SENTINEL: &str = "Year not specified";
pub const TITLE_SENTINEL: &str = "Position not specified";
pub const COMPANY_SENTINEL: &str = "Company not specified";
pub const DURATION_SENTINEL: &str = "Duration not specified";

/// One pattern per degree keyword, evaluated in vocabulary order: the first
/// keyword that matches anywhere wins, and the match runs to end of line.
static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEGREE_KEYWORDS
        .iter()
        .map(|kw| {
            Regex::new(&format!(r"(?i)\b{}s?\b.*?(?:\n|$)", regex::escape(kw))).unwrap()
        })
        .collect()
});

/// "University of X" first, then "X University".
static INSTITUTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:university|college|institute|school) of [\w\s]+").unwrap(),
        Regex::new(r"(?i)[\w\s]+ (?:university|college|institute|school)\b").unwrap(),
    ]
});

/// A 4-digit year, optionally extended into a range ending in a year or
/// "present"/"current"/"now".
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\b20\d{2}\b|\b19\d{2}\b)(?:\s*-\s*(?:\b20\d{2}\b|\b19\d{2}\b|present|current|now))?")
        .unwrap()
});

/// Capitalized phrase at the start of the entry ending in a role noun.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z\s]{2,30}(?:Developer|Engineer|Manager|Designer|Analyst|Consultant|Director|Lead|Architect|Specialist|Intern)")
        .unwrap()
});

static COMPANY_AT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:at|with|for) ([\w\s]+)").unwrap());

static COMPANY_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s]+) (?:Inc\.|LLC|Ltd\.)").unwrap());

fn find_trimmed(res: &[Regex], entry: &str) -> Option<String> {
    res.iter()
        .find_map(|re| re.find(entry))
        .map(|m| m.as_str().trim().to_string())
}

/// Emits a record iff a degree or an institution was found.
pub fn parse_education_entry(entry: &str) -> Option<EducationRecord> {
    let degree = find_trimmed(&DEGREE_RES, entry);
    let institution = find_trimmed(&INSTITUTION_RES, entry);
    if degree.is_none() && institution.is_none() {
        return None;
    }
    let year = YEAR_RANGE_RE.find(entry).map(|m| m.as_str().to_string());
    Some(EducationRecord {
        degree: degree.unwrap_or_else(|| DEGREE_SENTINEL.to_string()),
        institution: institution.unwrap_or_else(|| INSTITUTION_SENTINEL.to_string()),
        year: year.unwrap_or_else(|| YEAR_SENTINEL.to_string()),
    })
}

/// Emits a record iff a title or a company was found.
pub fn parse_experience_entry(entry: &str) -> Option<ExperienceRecord> {
    let title = TITLE_RE
        .find(entry)
        .map(|m| m.as_str().trim().to_string());
    let company = extract_company(entry);
    if title.is_none() && company.is_none() {
        return None;
    }
    let duration = DATE_RANGE_RE.find(entry).map(|m| m.as_str().to_string());
    Some(ExperienceRecord {
        title: title.unwrap_or_else(|| TITLE_SENTINEL.to_string()),
        company: company.unwrap_or_else(|| COMPANY_SENTINEL.to_string()),
        duration: duration.unwrap_or_else(|| DURATION_SENTINEL.to_string()),
    })
}

/// Priority order: "(at|with|for) X", then an "X Inc./LLC/Ltd." prefix,
/// then the entry's first line as a last resort.
fn extract_company(entry: &str) -> Option<String> {
    let raw = if let Some(caps) = COMPANY_AT_RE.captures(entry) {
        Some(caps[1].to_string())
    } else if let Some(caps) = COMPANY_SUFFIX_RE.captures(entry) {
        Some(caps[1].to_string())
    } else {
        entry.lines().next().map(str::to_string)
    };
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Emits a record whenever a non-empty name survives marker stripping.
/// `description` stays empty for single-line entries.
pub fn parse_project_entry(entry: &str) -> Option<ProjectRecord> {
    let mut lines = entry.trim().lines();
    let name = lines
        .next()?
        .trim_matches(|c: char| matches!(c, '•' | '*' | '-' | '\t' | ' ' | '.' | ')'))
        .to_string();
    if name.is_empty() {
        return None;
    }
    let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Some(ProjectRecord { name, description })
}
