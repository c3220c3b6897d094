//! Document-level types.

use super::Line;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A rendered CV, ready to be serialized.
///
/// All text is stored unescaped; encoders escape on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, locale)
    pub metadata: Metadata,

    /// Person's name, present only when the name field is non-empty
    pub header: Option<String>,

    /// Contact lines under the header, in display order
    pub contact: Vec<ContactLine>,

    /// Body sections, empty blocks omitted
    pub sections: Vec<Section>,

    /// Optional closing block
    pub footer: Option<Footer>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get the first section of a kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Total number of classified lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines().len()).sum()
    }

    /// Title used for the standalone document.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title, e.g. "CV - Ana Pérez"
    pub title: String,

    /// Person the CV belongs to
    pub author: Option<String>,

    /// Locale used for titles and dates
    pub locale: Locale,
}

/// Working language of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English section titles and dates
    #[default]
    En,
    /// Spanish section titles and dates
    Es,
}

impl Locale {
    /// BCP 47 language tag.
    pub fn lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parse a language tag such as `es`, `es-ES` or `en_US`.
    pub fn parse(s: &str) -> Option<Self> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Long-form date, e.g. "October 16, 2026" or "16 de octubre de 2026".
    pub fn format_date(self, date: NaiveDate) -> String {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        const ES: [&str; 12] = [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ];
        let month = date.month0() as usize;
        match self {
            Locale::En => format!("{} {}, {}", EN[month], date.day(), date.year()),
            Locale::Es => format!("{} de {} de {}", date.day(), ES[month], date.year()),
        }
    }
}

/// One line of the contact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactLine {
    /// Plain text parts joined with " • "
    Text { parts: Vec<String> },
    /// Labelled links joined with " • "
    Links { links: Vec<Link> },
}

impl ContactLine {
    /// Plain text of the line.
    pub fn plain_text(&self) -> String {
        match self {
            ContactLine::Text { parts } => parts.join(" • "),
            ContactLine::Links { links } => links
                .iter()
                .map(|l| format!("{}: {}", l.label, l.url))
                .collect::<Vec<_>>()
                .join(" • "),
        }
    }
}

/// A labelled absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible label ("LinkedIn", "Portfolio")
    pub label: String,

    /// Absolute URL
    pub url: String,
}

impl Link {
    /// Create a link, making the URL absolute.
    ///
    /// Values that do not start with `http` get an `https://` prefix.
    pub fn new(label: impl Into<String>, raw: &str) -> Self {
        let raw = raw.trim();
        let url = if raw.starts_with("http") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };
        Self {
            label: label.into(),
            url,
        }
    }
}

/// Kind of a body section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Education,
    Experience,
    Skills,
}

impl SectionKind {
    /// Default title in the given locale.
    pub fn default_title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SectionKind::Summary, Locale::En) => "Professional Summary",
            (SectionKind::Education, Locale::En) => "Education",
            (SectionKind::Experience, Locale::En) => "Professional Experience",
            (SectionKind::Skills, Locale::En) => "Skills and Competencies",
            (SectionKind::Summary, Locale::Es) => "Resumen Profesional",
            (SectionKind::Education, Locale::Es) => "Educación",
            (SectionKind::Experience, Locale::Es) => "Experiencia Profesional",
            (SectionKind::Skills, Locale::Es) => "Habilidades y Competencias",
        }
    }
}

/// A titled section of the CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which block produced the section
    pub kind: SectionKind,

    /// Section heading text
    pub title: String,

    /// Section content
    pub body: SectionBody,
}

impl Section {
    /// Create a section holding one paragraph.
    pub fn with_paragraph(
        kind: SectionKind,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            body: SectionBody::Paragraph(text.into()),
        }
    }

    /// Create a section holding classified lines.
    pub fn with_lines(kind: SectionKind, title: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: SectionBody::Lines(lines),
        }
    }

    /// Classified lines of the section (empty for paragraph sections).
    pub fn lines(&self) -> &[Line] {
        match &self.body {
            SectionBody::Lines(lines) => lines,
            SectionBody::Paragraph(_) => &[],
        }
    }
}

/// Content of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    /// One justified, italic paragraph
    Paragraph(String),
    /// Classified lines in source order
    Lines(Vec<Line>),
}

/// Closing block with the person's name and generation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Person's name
    pub name: String,

    /// Date the document was generated
    pub generated_on: Option<NaiveDate>,
}
