//! Rendering options and configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::classify::DEFAULT_INSTITUTION_KEYWORDS;
use crate::error::Result;
use crate::model::{Locale, SectionKind};

/// Default maximum length of the sanitized name in file names.
pub const DEFAULT_MAX_FILE_NAME_LENGTH: usize = 50;

/// Options for building and rendering a CV.
///
/// Every field has a default, so a JSON options file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Language of default section titles and dates
    pub locale: Locale,

    /// Section title overrides; missing kinds fall back to the locale
    pub section_titles: BTreeMap<SectionKind, String>,

    /// Emit the closing name/date block
    pub footer_enabled: bool,

    /// Date printed in the footer and used in file names
    pub generated_on: Option<NaiveDate>,

    /// Inline page styling
    pub page_style: PageStyle,

    /// File name prefix ("CV" gives `CV_<name>_<date>.doc`)
    pub file_prefix: String,

    /// Maximum characters kept from the sanitized name
    pub max_file_name_length: usize,

    /// Keywords that mark an education line as an institution
    pub institution_keywords: Vec<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Override one section title.
    pub fn with_section_title(mut self, kind: SectionKind, title: impl Into<String>) -> Self {
        self.section_titles.insert(kind, title.into());
        self
    }

    /// Enable or disable the footer.
    pub fn with_footer(mut self, enabled: bool) -> Self {
        self.footer_enabled = enabled;
        self
    }

    /// Set the generation date.
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Set the page style.
    pub fn with_page_style(mut self, style: PageStyle) -> Self {
        self.page_style = style;
        self
    }

    /// Set the file name prefix.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set the maximum length of the sanitized name.
    pub fn with_max_file_name_length(mut self, len: usize) -> Self {
        self.max_file_name_length = len;
        self
    }

    /// Replace the institution keyword set.
    pub fn with_institution_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.institution_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Title for a section: the override if present, else the locale default.
    pub fn section_title(&self, kind: SectionKind) -> String {
        self.section_titles
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.default_title(self.locale).to_string())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            section_titles: BTreeMap::new(),
            footer_enabled: false,
            generated_on: None,
            page_style: PageStyle::default(),
            file_prefix: "CV".to_string(),
            max_file_name_length: DEFAULT_MAX_FILE_NAME_LENGTH,
            institution_keywords: DEFAULT_INSTITUTION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Inline CSS values for the rendered page.
///
/// These are trusted configuration and are written into markup unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyle {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub color: String,
    pub max_width: String,
    pub padding: String,
    pub link_color: String,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            font_family: "'Times New Roman', serif".to_string(),
            font_size: "11pt".to_string(),
            line_height: "1.4".to_string(),
            color: "#000".to_string(),
            max_width: "8.5in".to_string(),
            padding: "0.3in".to_string(),
            link_color: "#0077b5".to_string(),
        }
    }
}
