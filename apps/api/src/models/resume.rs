use serde::{Deserialize, Serialize};

/// One education entry extracted from the document. All three fields are
/// always non-empty: either an extracted value or its sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// One work-experience entry. Same sentinel policy as [`EducationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub duration: String,
}

/// One project entry. `description` may be empty — there is no sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
}

/// The structured result of parsing one resume document.
///
/// Absence is represented in-band: `None` for identity fields, empty
/// sequences for the rest. Produced once per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
}
