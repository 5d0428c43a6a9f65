//! Templated farming advice and a parser that splits it into sections.

mod generator;
mod sections;

pub use generator::generate_advisory;
pub use sections::{parse_sections, AdvisorySection, SectionKind, GENERAL_SECTION_TITLE};
