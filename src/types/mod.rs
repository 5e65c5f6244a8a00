//! Core types for Trinum

mod analysis;
mod date;
mod digit;
mod error;
mod output;
mod triangle;

pub use analysis::{Analysis, AnalysisSection, SectionKind};
pub use date::{BirthDate, DateDigits};
pub use digit::Digit;
pub use error::DateError;
pub use triangle::{CoreCodes, InnerTriangle, OuterTriangle, Readings, TriangleResult};
