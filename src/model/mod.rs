//! Document model types for CV content representation.
//!
//! A [`ResumeRecord`] is the raw form input; a [`Document`] is the
//! classified, format-agnostic tree the encoders in [`crate::render`] turn
//! into markup.

mod document;
mod line;
mod record;

pub use document::{
    ContactLine, Document, Footer, Link, Locale, Metadata, Section, SectionBody, SectionKind,
};
pub use line::{Line, LineRole};
pub use record::{Field, ResumeRecord};
