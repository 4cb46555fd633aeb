//! Line classifier — decides whether a line of document text is a section
//! header candidate, using keyword membership plus a length cap.

/// Header candidates must be shorter than this (trimmed) to be accepted.
/// Rejects body sentences that merely mention a keyword ("worked on
/// education software for 3 years") while keeping short literal headers.
pub const MAX_HEADER_LEN: usize = 30;

/// The closed set of section kinds the segmenter recognizes. Headers that
/// match none of these never open a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Education,
    Experience,
    Projects,
}

impl SectionKind {
    /// Keywords whose presence (in a short line) marks a header candidate.
    pub fn header_keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => &[
                "education",
                "academic",
                "degree",
                "university",
                "college",
                "school",
                "institute",
            ],
            SectionKind::Experience => &[
                "experience",
                "employment",
                "work history",
                "professional experience",
                "career",
            ],
            SectionKind::Projects => &["projects", "personal projects", "academic projects"],
        }
    }

    /// Keywords that close an open section of this kind when they appear in
    /// a short line. These belong to the *other* kinds (plus a few headers,
    /// like "skills", that are not section kinds at all).
    pub fn terminator_keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => &[
                "experience",
                "work",
                "employment",
                "professional",
                "projects",
                "skills",
            ],
            SectionKind::Experience => &["education", "projects", "skills", "certifications"],
            SectionKind::Projects => &["experience", "education", "skills", "certifications"],
        }
    }

    /// Literal header labels for this kind. An entry span whose trimmed,
    /// lowercased text equals one of these is a leftover header fragment,
    /// not an entry.
    pub fn header_labels(self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => &["education"],
            SectionKind::Experience => &["experience", "work experience", "employment history"],
            SectionKind::Projects => &["projects", "personal projects", "academic projects"],
        }
    }
}

/// True iff `line` qualifies as a header candidate for `kind`: its trimmed,
/// lowercased form contains one of the kind's header keywords and is shorter
/// than [`MAX_HEADER_LEN`] characters.
pub fn is_header_candidate(line: &str, kind: SectionKind) -> bool {
    let lowered = line.trim().to_lowercase();
    lowered.chars().count() < MAX_HEADER_LEN
        && kind
            .header_keywords()
            .iter()
            .any(|kw| lowered.contains(kw))
}

/// True iff `line` closes an open section of `kind`: non-empty, shorter than
/// [`MAX_HEADER_LEN`], and containing one of the kind's terminator keywords.
pub fn is_terminator(line: &str, kind: SectionKind) -> bool {
    let lowered = line.trim().to_lowercase();
    !lowered.is_empty()
        && lowered.chars().count() < MAX_HEADER_LEN
        && kind
            .terminator_keywords()
            .iter()
            .any(|kw| lowered.contains(kw))
}
