//! Interpretation sections attached to a triangle result

use serde::Serialize;

/// Which code a section interprets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Apex O
    MainPersonality,
    Subconscious,
    InnerCode,
    OuterCode,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MainPersonality => "Main personality",
            Self::Subconscious => "Subconscious code",
            Self::InnerCode => "Inner code",
            Self::OuterCode => "Outer code",
        }
    }
}

/// One interpreted code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSection {
    pub kind: SectionKind,
    pub title: &'static str,
    pub code: u32,
    /// What this code stands for in general
    pub summary: &'static str,
    /// Interpretation of this particular value
    pub text: &'static str,
}

/// Ordered interpretation: main personality, subconscious, inner, outer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub sections: Vec<AnalysisSection>,
}

impl Analysis {
    pub fn section(&self, kind: SectionKind) -> Option<&AnalysisSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}
