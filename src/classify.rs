//! Line classification for free-text résumé blocks.
//!
//! Each non-blank line of a block gets exactly one [`LineRole`] from
//! keyword and pattern heuristics. Classification is line-local: no state
//! carries over between lines and there is no lookahead.
//!
//! # Example
//!
//! ```
//! use harvardcv::classify::{BlockKind, Classifier};
//! use harvardcv::LineRole;
//!
//! let classifier = Classifier::default();
//! assert_eq!(
//!     classifier.classify(BlockKind::Education, "Universidad Nacional, 2020"),
//!     LineRole::Institution
//! );
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Field, Line, LineRole, SectionKind};

/// Glyph that marks an experience bullet.
pub const BULLET: char = '•';

/// Institution keywords, Spanish and English, matched case-sensitively.
pub const DEFAULT_INSTITUTION_KEYWORDS: &[&str] = &[
    "Universidad",
    "Instituto",
    "Colegio",
    "Escuela",
    "Conservatorio",
    "University",
    "Institute",
    "College",
    "School",
    "Conservatory",
];

/// The multi-line blocks that are classified line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Education,
    Experience,
    Skills,
}

impl BlockKind {
    /// All block kinds in render order.
    pub const ALL: [BlockKind; 3] = [
        BlockKind::Education,
        BlockKind::Experience,
        BlockKind::Skills,
    ];

    /// Record field holding this block.
    pub fn field(self) -> Field {
        match self {
            BlockKind::Education => Field::Education,
            BlockKind::Experience => Field::Experience,
            BlockKind::Skills => Field::Skills,
        }
    }

    /// Section the block renders into.
    pub fn section_kind(self) -> SectionKind {
        match self {
            BlockKind::Education => SectionKind::Education,
            BlockKind::Experience => SectionKind::Experience,
            BlockKind::Skills => SectionKind::Skills,
        }
    }

    /// Parse a block name (`education`, `experience`, `skills`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "education" | "educacion" | "educación" => Some(BlockKind::Education),
            "experience" | "experiencia" => Some(BlockKind::Experience),
            "skills" | "habilidades" => Some(BlockKind::Skills),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().key())
    }
}

/// Heuristic line classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    institution_keywords: Vec<String>,
    year_pattern: Regex,
}

impl Classifier {
    /// Create a classifier with a custom institution keyword set.
    ///
    /// Empty keywords are dropped; they would match every line.
    pub fn new<I, S>(institution_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            institution_keywords: institution_keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.is_empty())
                .collect(),
            year_pattern: Regex::new(r"[0-9]{4}").unwrap(),
        }
    }

    /// Institution keywords in use.
    pub fn institution_keywords(&self) -> &[String] {
        &self.institution_keywords
    }

    /// Assign a role to one trimmed, non-empty line.
    pub fn classify(&self, kind: BlockKind, line: &str) -> LineRole {
        match kind {
            BlockKind::Education => {
                if self.is_institution(line) {
                    LineRole::Institution
                } else if self.has_year(line) {
                    LineRole::DateRange
                } else {
                    LineRole::Heading
                }
            }
            BlockKind::Experience => {
                if line.starts_with(BULLET) {
                    LineRole::BulletItem
                } else if line.contains(',') && self.has_year(line) {
                    LineRole::DateRange
                } else {
                    LineRole::Heading
                }
            }
            BlockKind::Skills => {
                if line.contains(':') {
                    LineRole::CategoryContent
                } else {
                    LineRole::Plain
                }
            }
        }
    }

    /// Classify one line and extract its display text.
    pub fn classify_line(&self, kind: BlockKind, line: &str) -> Line {
        let line = line.trim();
        let role = self.classify(kind, line);
        log::trace!("{} line classified as {}: {:?}", kind, role.as_str(), line);

        match role {
            LineRole::BulletItem => {
                let rest = &line[BULLET.len_utf8()..];
                Line::new(role, rest.trim())
            }
            LineRole::CategoryContent => match line.split_once(':') {
                Some((category, content)) => Line::category(category.trim(), content.trim()),
                None => Line::new(LineRole::Plain, line),
            },
            _ => Line::new(role, line),
        }
    }

    /// Split a block into trimmed non-blank lines and classify them in order.
    pub fn classify_block(&self, kind: BlockKind, text: &str) -> Vec<Line> {
        let lines: Vec<Line> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| self.classify_line(kind, l))
            .collect();
        log::debug!("Classified {} block into {} lines", kind, lines.len());
        lines
    }

    fn is_institution(&self, line: &str) -> bool {
        self.institution_keywords
            .iter()
            .any(|keyword| line.contains(keyword.as_str()))
    }

    fn has_year(&self, line: &str) -> bool {
        self.year_pattern.is_match(line)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_INSTITUTION_KEYWORDS.iter().copied())
    }
}
