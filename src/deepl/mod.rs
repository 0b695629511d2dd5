//! DeepL API client and wire types.

mod client;
mod error;
mod language;
mod types;

pub use client::{DeeplApi, DeeplClient, FREE_API_ENDPOINT, PRO_API_ENDPOINT};
pub use error::DeeplError;
pub use language::{TARGET_LANGUAGES, parse_target_language, print_languages};
pub use types::{
    DocumentHandle, DocumentState, DocumentStatus, DocumentUpload, TextTranslation,
};

#[cfg(test)]
pub(crate) mod scripted;
