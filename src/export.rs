//! Preview and file export entry points.
//!
//! Both entry points run the validation gate first: a record without a name
//! or email is rejected before anything is rendered, and nothing reaches
//! the sink.
//!
//! # Example
//!
//! ```
//! use harvardcv::export::{generate_word, MemorySink};
//! use harvardcv::{RenderOptions, ResumeRecord};
//!
//! fn main() -> harvardcv::Result<()> {
//!     let record = ResumeRecord::with_identity("Ana Pérez", "ana@example.com");
//!     let mut sink = MemorySink::new();
//!     let result = generate_word(&record, &RenderOptions::default(), &mut sink)?;
//!     assert!(result.file_name.starts_with("CV_Ana_Pérez_"));
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filename;
use crate::model::ResumeRecord;
use crate::render::{self, RenderOptions, WORD_MIME_TYPE};

/// Destination for exported files.
///
/// Implementations either store the bytes or return an error; errors are
/// passed back to the caller unchanged.
pub trait DocumentSink {
    /// Store `data` under `file_name`.
    fn save(&mut self, file_name: &str, data: &[u8]) -> Result<()>;
}

/// Sink that writes files into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSink for DirectorySink {
    fn save(&mut self, file_name: &str, data: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, data)
            .map_err(|e| Error::Sink(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("Wrote {} ({} bytes)", path.display(), data.len());
        Ok(())
    }
}

/// Sink that keeps files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a saved file.
    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, data)| data.as_slice())
    }

    /// Check if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn save(&mut self, file_name: &str, data: &[u8]) -> Result<()> {
        self.files.push((file_name.to_string(), data.to_vec()));
        Ok(())
    }
}

/// Outcome of a successful file export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    /// Name the file was saved under
    pub file_name: String,

    /// MIME type of the payload
    pub mime_type: String,

    /// Payload size in bytes
    pub size: usize,
}

/// Render the preview fragment for a record.
pub fn generate_preview(record: &ResumeRecord, options: &RenderOptions) -> Result<String> {
    gate(record)?;
    let doc = render::render(record, options);
    Ok(render::to_fragment(&doc, options))
}

/// Render the standalone document and hand it to `sink`.
///
/// The file name uses `options.generated_on`, or today's local date when
/// unset.
pub fn generate_word(
    record: &ResumeRecord,
    options: &RenderOptions,
    sink: &mut dyn DocumentSink,
) -> Result<ExportResult> {
    gate(record)?;

    let date = options.generated_on.unwrap_or_else(today);
    let doc = render::render(record, options);
    let content = render::to_word_document(&doc, options);
    let file_name = filename::file_name(
        &record.name,
        date,
        &options.file_prefix,
        options.max_file_name_length,
    );

    sink.save(&file_name, content.as_bytes())?;
    log::info!("Exported {} ({} bytes)", file_name, content.len());

    Ok(ExportResult {
        file_name,
        mime_type: WORD_MIME_TYPE.to_string(),
        size: content.len(),
    })
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn gate(record: &ResumeRecord) -> Result<()> {
    if let Err(e) = record.validate() {
        log::warn!("Rejected record: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Map an error to the message the user sees.
    ///
    /// Missing input is a warning the user can fix; anything else is a
    /// generic failure carrying the error text.
    pub fn from_error(err: &Error) -> Self {
        let level = if err.is_user_correctable() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        let message = match err {
            Error::MissingRequiredField(_) => {
                "Please fill in at least the name and email.".to_string()
            }
            Error::InvalidEmail(email) => {
                format!("The email address \"{}\" does not look valid.", email)
            }
            other => format!("Error generating the document: {}", other),
        };
        Self { level, message }
    }
}
