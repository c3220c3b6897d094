//! Building a [`Document`] tree from a [`ResumeRecord`].

use crate::classify::{BlockKind, Classifier};
use crate::model::{
    ContactLine, Document, Footer, Link, Metadata, ResumeRecord, Section, SectionKind,
};

use super::RenderOptions;

/// Build a document from a record.
pub fn render(record: &ResumeRecord, options: &RenderOptions) -> Document {
    Renderer::new(options.clone()).render(record)
}

/// Assembles sections from a record.
///
/// Rendering is total and pure: the same record and options always produce
/// the same document, and absent optional fields only omit their part.
pub struct Renderer {
    options: RenderOptions,
    classifier: Classifier,
}

impl Renderer {
    /// Create a renderer; the classifier takes its keywords from the options.
    pub fn new(options: RenderOptions) -> Self {
        let classifier = Classifier::new(options.institution_keywords.iter().cloned());
        Self {
            options,
            classifier,
        }
    }

    /// Build the document tree.
    pub fn render(&self, record: &ResumeRecord) -> Document {
        let name = record.name.trim();
        let mut doc = Document::new();

        doc.metadata = Metadata {
            title: format!("CV - {}", name),
            author: non_empty(name).map(str::to_string),
            locale: self.options.locale,
        };

        doc.header = non_empty(name).map(str::to_string);
        doc.contact = self.contact_lines(record);

        if let Some(summary) = non_empty(&record.summary) {
            doc.add_section(Section::with_paragraph(
                SectionKind::Summary,
                self.options.section_title(SectionKind::Summary),
                summary,
            ));
        }

        for kind in BlockKind::ALL {
            if let Some(section) = self.block_section(kind, record.get(kind.field())) {
                doc.add_section(section);
            }
        }

        if self.options.footer_enabled {
            if let Some(name) = non_empty(name) {
                doc.footer = Some(Footer {
                    name: name.to_string(),
                    generated_on: self.options.generated_on,
                });
            }
        }

        log::debug!(
            "Rendered document with {} sections and {} lines",
            doc.sections.len(),
            doc.line_count()
        );
        doc
    }

    fn contact_lines(&self, record: &ResumeRecord) -> Vec<ContactLine> {
        let mut lines = Vec::new();

        let parts: Vec<String> = [&record.location, &record.phone]
            .into_iter()
            .filter_map(|v| non_empty(v))
            .map(str::to_string)
            .collect();
        if !parts.is_empty() {
            lines.push(ContactLine::Text { parts });
        }

        if let Some(email) = non_empty(&record.email) {
            lines.push(ContactLine::Text {
                parts: vec![email.to_string()],
            });
        }

        let links: Vec<Link> = [("LinkedIn", &record.linkedin), ("Portfolio", &record.portfolio)]
            .into_iter()
            .filter_map(|(label, v)| non_empty(v).map(|v| Link::new(label, v)))
            .collect();
        if !links.is_empty() {
            lines.push(ContactLine::Links { links });
        }

        lines
    }

    fn block_section(&self, kind: BlockKind, text: &str) -> Option<Section> {
        let lines = self.classifier.classify_block(kind, text);
        if lines.is_empty() {
            return None;
        }
        let section_kind = kind.section_kind();
        Some(Section::with_lines(
            section_kind,
            self.options.section_title(section_kind),
            lines,
        ))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
