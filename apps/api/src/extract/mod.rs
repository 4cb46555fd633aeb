//! Heuristic text-to-structure extraction engine.
//!
//! Turns a flat sequence of resume lines — no guaranteed formatting — into
//! typed, bounded records. The pipeline is synchronous, deterministic, and
//! stateless: classifier → section segmenter → entry splitter → field
//! extractor, with identity and skill passes running over the whole text
//! independently of segmentation. It never fails; every absence degrades to
//! `None`, a sentinel string, or an empty sequence.

pub mod classifier;
pub mod entries;
pub mod fields;
pub mod identity;
pub mod sections;
pub mod skills;

use crate::extract::classifier::SectionKind;
use crate::models::resume::{EducationRecord, ExperienceRecord, ParsedResume, ProjectRecord};

/// Sole entry point of the engine. Never panics and never errors, whatever
/// the input text looks like.
pub fn extract(text: &str) -> ParsedResume {
    ParsedResume {
        name: identity::extract_name(text),
        email: identity::extract_email(text),
        phone: identity::extract_phone(text),
        skills: skills::extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
        projects: extract_projects(text),
    }
}

fn extract_education(text: &str) -> Vec<EducationRecord> {
    section_entries(text, SectionKind::Education)
        .iter()
        .filter_map(|entry| fields::parse_education_entry(entry))
        .collect()
}

fn extract_experience(text: &str) -> Vec<ExperienceRecord> {
    section_entries(text, SectionKind::Experience)
        .iter()
        .filter_map(|entry| fields::parse_experience_entry(entry))
        .collect()
}

fn extract_projects(text: &str) -> Vec<ProjectRecord> {
    section_entries(text, SectionKind::Projects)
        .iter()
        .filter_map(|entry| fields::parse_project_entry(entry))
        .collect()
}

fn section_entries(text: &str, kind: SectionKind) -> Vec<String> {
    match sections::segment(text, kind) {
        Some(section) => entries::entries(section.kind, &section.raw_text)
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "Jane Smith\njane.smith@mail.com\n555-222-3344\n\nEducation\nBS Computer Science\nState University\n2019\n\nExperience\nSoftware Engineer at Acme Corp\n2020 - Present\n";

    #[test]
    fn test_full_resume_scenario() {
        let parsed = extract(FULL_RESUME);
        assert_eq!(parsed.name.as_deref(), Some("Jane Smith"));
        assert_eq!(parsed.email.as_deref(), Some("jane.smith@mail.com"));
        assert!(parsed.phone.as_deref().unwrap().contains("555-222-3344"));

        assert_eq!(parsed.education.len(), 1);
        assert!(parsed.education[0].year.contains("2019"));

        assert_eq!(parsed.experience.len(), 1);
        assert!(parsed.experience[0].company.contains("Acme"));
        assert!(parsed.experience[0].duration.contains("2020"));
        assert!(parsed.experience[0].duration.contains("Present"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract(FULL_RESUME), extract(FULL_RESUME));
    }

    #[test]
    fn test_near_empty_text_yields_empty_result() {
        let parsed = extract("hi\n\n");
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_skills_only_text() {
        let parsed = extract("python javascript leadership");
        assert_eq!(parsed.skills, vec!["python", "javascript", "leadership"]);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.projects.is_empty());
        // The positional name heuristic has no skill awareness: a lone
        // short line doubles as the name candidate.
        assert_eq!(parsed.name.as_deref(), Some("python javascript leadership"));
    }

    #[test]
    fn test_skill_order_is_independent_of_document_order() {
        let a = extract("knows rust and python");
        let b = extract("knows python and rust");
        assert_eq!(a.skills, b.skills);
        assert_eq!(a.skills, vec!["python", "rust"]);
    }

    #[test]
    fn test_education_section_closes_before_experience_header() {
        let doc = "Education\nUniversity of Example\nExperience\nEngineer at Initech\n";
        let education = sections::segment(doc, SectionKind::Education).unwrap();
        assert!(!education.raw_text.contains("Experience"));
        let parsed = extract(doc);
        assert_eq!(parsed.education.len(), 1);
        assert!(parsed.education[0].institution.contains("University of Example"));
        assert_eq!(parsed.experience.len(), 1);
        assert!(parsed.experience[0].company.contains("Initech"));
    }

    #[test]
    fn test_all_emitted_records_have_non_empty_fields() {
        let parsed = extract(FULL_RESUME);
        for record in &parsed.education {
            assert!(!record.degree.is_empty());
            assert!(!record.institution.is_empty());
            assert!(!record.year.is_empty());
        }
        for record in &parsed.experience {
            assert!(!record.title.is_empty());
            assert!(!record.company.is_empty());
            assert!(!record.duration.is_empty());
        }
    }

    #[test]
    fn test_projects_pipeline() {
        let doc = "Projects\n• Resume Parser\nHeuristic extraction of typed records from flat text\n• Chat Server\nAsync chat server built on tokio\n";
        let parsed = extract(doc);
        assert_eq!(parsed.projects.len(), 2);
        assert_eq!(parsed.projects[0].name, "Resume Parser");
        assert!(parsed.projects[0]
            .description
            .contains("Heuristic extraction"));
        assert_eq!(parsed.projects[1].name, "Chat Server");
    }

    #[test]
    fn test_unstructured_prose_produces_no_records() {
        let doc = "I have spent a decade gardening and writing long letters about it.\nNothing here resembles a structured document.\n";
        let parsed = extract(doc);
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.projects.is_empty());
    }
}
