//! The two translation paths run for each file.

mod document;
mod text;

pub use document::{DocumentOutcome, DocumentPipeline, POLL_INTERVAL};
pub use text::translate_text_file;
