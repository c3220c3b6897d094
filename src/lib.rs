//! # harvardcv
//!
//! Harvard-style CV rendering from free-text résumé fields.
//!
//! Multi-line blocks (education, experience, skills) are classified line by
//! line with keyword and pattern heuristics, assembled into a document tree
//! and serialized as an embeddable HTML fragment or a standalone document
//! that word processors open as a `.doc` file.
//!
//! ## Quick Start
//!
//! ```
//! use harvardcv::{render, Field, RenderOptions, ResumeRecord};
//!
//! let record = ResumeRecord::with_identity("Ana Pérez", "ana@example.com")
//!     .with(Field::Education, "BSc Computer Science\nUniversity of Chicago\n2018 - 2022");
//!
//! let options = RenderOptions::default();
//! let doc = render::render(&record, &options);
//! let html = render::to_fragment(&doc, &options);
//! assert!(html.contains("University of Chicago"));
//! ```
//!
//! ## Features
//!
//! - **Line classification**: institutions, dates, bullets, `Category: content`
//! - **Two encodings**: preview fragment and Word-compatible document
//! - **Escaping**: every user-supplied value is HTML-escaped
//! - **Configurable**: section titles, locale, footer, page style, keywords
//! - **FFI**: C-ABI entry points behind the `ffi` feature

pub mod classify;
pub mod error;
pub mod export;
pub mod filename;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use classify::{BlockKind, Classifier};
pub use error::{Error, Result};
pub use export::{
    generate_preview, generate_word, DirectorySink, DocumentSink, ExportResult, MemorySink,
    Notice, NoticeLevel,
};
pub use model::{
    ContactLine, Document, Field, Footer, Line, LineRole, Link, Locale, Metadata, ResumeRecord,
    Section, SectionBody, SectionKind,
};
pub use render::{JsonFormat, PageStyle, RenderOptions};

use chrono::NaiveDate;
use std::path::Path;

/// Load a record from a JSON file.
///
/// # Example
///
/// ```no_run
/// let record = harvardcv::load_record("cv.json").unwrap();
/// println!("{}", record.name);
/// ```
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    let data = std::fs::read_to_string(path)?;
    ResumeRecord::from_json(&data)
}

/// Render the preview fragment with default options.
///
/// # Example
///
/// ```
/// use harvardcv::{to_fragment, ResumeRecord};
///
/// let html = to_fragment(&ResumeRecord::with_identity("Ana", "ana@example.com")).unwrap();
/// assert!(html.contains("ana@example.com"));
/// ```
pub fn to_fragment(record: &ResumeRecord) -> Result<String> {
    generate_preview(record, &RenderOptions::default())
}

/// Render the standalone Word-compatible document with default options.
pub fn to_word_document(record: &ResumeRecord) -> Result<String> {
    record.validate()?;
    let options = RenderOptions::default();
    let doc = render::render(record, &options);
    Ok(render::to_word_document(&doc, &options))
}

/// Builder for rendering and exporting CVs.
///
/// # Example
///
/// ```
/// use harvardcv::{HarvardCv, Locale, MemorySink, ResumeRecord};
///
/// let record = ResumeRecord::example();
/// let cv = HarvardCv::new()
///     .with_locale(Locale::Es)
///     .with_footer()
///     .render(&record)?;
///
/// let mut sink = MemorySink::new();
/// let exported = cv.save(&mut sink)?;
/// assert!(exported.file_name.ends_with(".doc"));
/// # Ok::<(), harvardcv::Error>(())
/// ```
pub struct HarvardCv {
    options: RenderOptions,
    strict_email: bool,
}

impl HarvardCv {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            strict_email: false,
        }
    }

    /// Start from existing options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.options = self.options.with_locale(locale);
        self
    }

    /// Emit the footer with today's date.
    pub fn with_footer(mut self) -> Self {
        self.options = self.options.with_footer(true);
        self
    }

    /// Fix the generation date instead of using today's.
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.options = self.options.with_generation_date(date);
        self
    }

    /// Override a section title.
    pub fn with_section_title(mut self, kind: SectionKind, title: impl Into<String>) -> Self {
        self.options = self.options.with_section_title(kind, title);
        self
    }

    /// Set the file name prefix.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options = self.options.with_file_prefix(prefix);
        self
    }

    /// Also reject malformed email addresses.
    pub fn strict_email(mut self) -> Self {
        self.strict_email = true;
        self
    }

    /// Validate and render a record.
    ///
    /// The generation date is pinned here so every output of the result
    /// agrees on it.
    pub fn render(self, record: &ResumeRecord) -> Result<CvResult> {
        if self.strict_email {
            record.validate_strict()?;
        } else {
            record.validate()?;
        }

        let mut options = self.options;
        if options.generated_on.is_none() {
            options.generated_on = Some(export::today());
        }

        let document = render::render(record, &options);
        Ok(CvResult {
            document,
            record: record.clone(),
            options,
        })
    }
}

impl Default for HarvardCv {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered CV with the options it was rendered with.
pub struct CvResult {
    /// The document tree
    pub document: Document,
    record: ResumeRecord,
    options: RenderOptions,
}

impl CvResult {
    /// Preview fragment.
    pub fn to_fragment(&self) -> String {
        render::to_fragment(&self.document, &self.options)
    }

    /// Standalone Word-compatible document.
    pub fn to_word_document(&self) -> String {
        render::to_word_document(&self.document, &self.options)
    }

    /// Document tree as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Download file name.
    pub fn file_name(&self) -> String {
        filename::file_name(
            &self.record.name,
            self.options.generated_on.unwrap_or_else(export::today),
            &self.options.file_prefix,
            self.options.max_file_name_length,
        )
    }

    /// Hand the Word document to a sink.
    pub fn save(&self, sink: &mut dyn DocumentSink) -> Result<ExportResult> {
        generate_word(&self.record, &self.options, sink)
    }

    /// Options used for rendering.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}
