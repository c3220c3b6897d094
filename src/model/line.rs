//! Classified line types.

use serde::{Deserialize, Serialize};

/// Semantic role of one line inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// School or university line (education)
    Institution,
    /// Date line, or "Employer, Location - dates" line in experience
    DateRange,
    /// Line starting with the `•` glyph (experience)
    BulletItem,
    /// `Category: content` line (skills)
    CategoryContent,
    /// Degree or job title; default for education and experience
    Heading,
    /// Unstyled line; default for skills
    Plain,
}

impl LineRole {
    /// Short name used in CLI output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            LineRole::Institution => "institution",
            LineRole::DateRange => "date_range",
            LineRole::BulletItem => "bullet_item",
            LineRole::CategoryContent => "category_content",
            LineRole::Heading => "heading",
            LineRole::Plain => "plain",
        }
    }
}

/// A single classified line, holding unescaped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Role assigned by the classifier
    pub role: LineRole,

    /// Line text. For bullets this excludes the glyph; for category lines
    /// it is the content after the first colon.
    pub text: String,

    /// Category label of a `CategoryContent` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Line {
    /// Create a line with the given role.
    pub fn new(role: LineRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            category: None,
        }
    }

    /// Create a `Category: content` line.
    pub fn category(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: LineRole::CategoryContent,
            text: content.into(),
            category: Some(category.into()),
        }
    }

    /// Plain text as the user would read it back.
    pub fn plain_text(&self) -> String {
        match (self.role, &self.category) {
            (LineRole::BulletItem, _) => format!("• {}", self.text),
            (LineRole::CategoryContent, Some(category)) => format!("{}: {}", category, self.text),
            _ => self.text.clone(),
        }
    }
}
