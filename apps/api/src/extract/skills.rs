//! Skill matcher — membership test of a fixed vocabulary against the
//! lowercased document text.
//!
//! The vocabulary is process-wide immutable data; its declaration order is
//! the output order, so results never depend on where in the document a
//! skill appears.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known skill, technology, and soft-skill tokens, in output order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "javascript", "react", "angular", "vue", "node.js", "express",
    "mongodb", "sql", "mysql", "postgresql", "nosql", "firebase", "aws", "azure",
    "gcp", "docker", "kubernetes", "ci/cd", "jenkins", "git", "github", "gitlab",
    "html", "css", "sass", "less", "bootstrap", "tailwind", "typescript",
    "java", "c++", "c#", ".net", "php", "ruby", "go", "rust", "swift",
    "android", "ios", "flutter", "react native", "electron",
    "machine learning", "deep learning", "ai", "data science", "data analysis",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy",
    "agile", "scrum", "kanban", "jira", "confluence",
    "communication", "leadership", "project management", "team work",
    "problem solving", "critical thinking", "time management",
];

/// Word-bounded matcher per token, compiled once. Tokens whose edges are
/// non-word characters (`c++`, `c#`, `.net`) can never satisfy `\b` and so
/// never match; the vocabulary keeps them anyway.
static SKILL_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|skill| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(skill))).unwrap();
            (*skill, re)
        })
        .collect()
});

/// Returns every vocabulary token present in `text`, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SKILL_RES
        .iter()
        .filter(|(_, re)| re.is_match(&lowered))
        .map(|(skill, _)| skill.to_string())
        .collect()
}
