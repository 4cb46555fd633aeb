//! Section segmenter — one tiny state machine per section kind.
//!
//! Each machine scans the whole document independently, so the three kinds
//! stay provably isolated from one another. A machine opens at the first
//! header candidate for its kind, buffers lines (header included), and
//! closes for good at the first short line carrying a terminator keyword.
//! The terminating line is discarded from the closing section; the machine
//! for that line's own kind encounters it in its own pass instead.

use crate::extract::classifier::{is_header_candidate, is_terminator, SectionKind};

/// A contiguous span of document text attributed to one section kind.
/// `raw_text` holds the buffered lines, header first, newline-terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No header seen yet.
    Awaiting,
    /// Header seen, lines are being buffered.
    Open,
    /// Terminator seen. Terminal: the machine never reopens, so a second
    /// header for an already-closed kind is ignored (first match wins).
    Closed,
}

/// State machine for a single kind. Feed it lines in document order, then
/// call [`SectionMachine::finish`].
#[derive(Debug)]
pub struct SectionMachine {
    kind: SectionKind,
    state: State,
    raw_text: String,
}

impl SectionMachine {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            state: State::Awaiting,
            raw_text: String::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    pub fn feed(&mut self, line: &str) {
        match self.state {
            State::Closed => {}
            State::Awaiting => {
                if is_header_candidate(line, self.kind) {
                    self.state = State::Open;
                    self.push(line);
                }
            }
            State::Open => {
                // Own-kind keywords outrank terminators: a short line like
                // "Academic Projects" keeps an Education section open.
                if is_header_candidate(line, self.kind) {
                    self.push(line);
                } else if is_terminator(line, self.kind) {
                    // The triggering line is dropped from this section.
                    self.state = State::Closed;
                } else if !line.trim().is_empty() {
                    self.push(line);
                }
            }
        }
    }

    fn push(&mut self, line: &str) {
        self.raw_text.push_str(line);
        self.raw_text.push('\n');
    }

    pub fn finish(self) -> Option<Section> {
        if self.raw_text.is_empty() {
            return None;
        }
        Some(Section {
            kind: self.kind,
            raw_text: self.raw_text,
        })
    }
}

/// Runs one kind's machine over the document. Returns at most one section.
pub fn segment(text: &str, kind: SectionKind) -> Option<Section> {
    let mut machine = SectionMachine::new(kind);
    for line in text.lines() {
        if machine.is_closed() {
            break;
        }
        machine.feed(line);
    }
    machine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_includes_header_and_body() {
        let doc = "Education\nBS Computer Science\nState University\n2019\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert_eq!(
            section.raw_text,
            "Education\nBS Computer Science\nState University\n2019\n"
        );
    }

    #[test]
    fn test_no_header_yields_no_section() {
        let doc = "just some text\nwith no headers at all\n";
        assert!(segment(doc, SectionKind::Education).is_none());
        assert!(segment(doc, SectionKind::Experience).is_none());
        assert!(segment(doc, SectionKind::Projects).is_none());
    }

    #[test]
    fn test_blank_lines_inside_section_are_skipped() {
        let doc = "Education\n\nState University\n\n2019\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert_eq!(section.raw_text, "Education\nState University\n2019\n");
    }

    #[test]
    fn test_terminator_closes_section_and_is_discarded() {
        let doc = "Education\nUniversity of Example\nExperience\nAcme Corp work\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert_eq!(section.raw_text, "Education\nUniversity of Example\n");
        assert!(!section.raw_text.contains("Experience"));
    }

    #[test]
    fn test_terminating_line_opens_its_own_kind_in_its_own_pass() {
        // The closing line is lost to the section it terminates, but the
        // machine for its own kind sees it independently.
        let doc = "Education\nUniversity of Example\nExperience\nEngineer at Acme\n";
        let education = segment(doc, SectionKind::Education).unwrap();
        let experience = segment(doc, SectionKind::Experience).unwrap();
        assert!(!education.raw_text.contains("Experience"));
        assert_eq!(experience.raw_text, "Experience\nEngineer at Acme\n");
    }

    #[test]
    fn test_closed_section_never_reopens() {
        // Intentional: first match wins; text under the second "Education"
        // header is lost to the education section.
        let doc = "Education\nState University\nSkills\nPython\nEducation\nAnother College\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert_eq!(section.raw_text, "Education\nState University\n");
        assert!(!section.raw_text.contains("Another College"));
    }

    #[test]
    fn test_own_kind_keyword_outranks_terminator() {
        // "Academic Projects" carries both an education keyword and a
        // projects terminator; the open education section keeps it.
        let doc = "Education\nState University\nAcademic Projects\nBuilt a compiler\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert!(section.raw_text.contains("Academic Projects"));
        assert!(section.raw_text.contains("Built a compiler"));
    }

    #[test]
    fn test_long_line_with_terminator_keyword_stays_in_section() {
        let doc = "Education\nState University\nrelevant work during my studies included tutoring\n";
        let section = segment(doc, SectionKind::Education).unwrap();
        assert!(section
            .raw_text
            .contains("relevant work during my studies included tutoring"));
    }

    #[test]
    fn test_machines_are_independent() {
        let doc = "Experience\nEngineer at Acme\nEducation\nState University\nProjects\n- a parser built in a weekend\n";
        let experience = segment(doc, SectionKind::Experience).unwrap();
        let education = segment(doc, SectionKind::Education).unwrap();
        let projects = segment(doc, SectionKind::Projects).unwrap();
        assert_eq!(experience.raw_text, "Experience\nEngineer at Acme\n");
        assert_eq!(education.raw_text, "Education\nState University\n");
        assert_eq!(projects.raw_text, "Projects\n- a parser built in a weekend\n");
    }

    #[test]
    fn test_sections_are_disjoint_in_line_positions() {
        let doc = "Education\nState University\nExperience\nEngineer at Acme\nProjects\n- wrote a resume parser\n";
        let kinds = [
            SectionKind::Education,
            SectionKind::Experience,
            SectionKind::Projects,
        ];
        let sections: Vec<Section> = kinds
            .iter()
            .filter_map(|&kind| segment(doc, kind))
            .collect();
        assert_eq!(sections.len(), 3);
        // Every line of the document lands in at most one section.
        for line in doc.lines() {
            let owners = sections
                .iter()
                .filter(|s| s.raw_text.lines().any(|l| l == line))
                .count();
            assert!(owners <= 1, "line {line:?} appears in {owners} sections");
        }
    }
}
