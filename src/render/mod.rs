//! Rendering module: record → document tree → markup.

mod builder;
mod escape;
mod html;
mod json;
mod options;
mod word;

pub use builder::{render, Renderer};
pub use escape::escape_html;
pub use html::{container_style, to_fragment, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{PageStyle, RenderOptions, DEFAULT_MAX_FILE_NAME_LENGTH};
pub use word::{to_standalone_document, to_word_document, PAGE_MARGIN, PAGE_SIZE, WORD_MIME_TYPE};
