use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a document translation job on the DeepL side.
///
/// Returned by the upload call. Every status and download request needs both
/// fields, so they always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentHandle {
    pub document_id: String,
    pub document_key: String,
}

/// Lifecycle state reported by the document status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentState {
    Queued,
    Translating,
    Done,
    Error,
    /// Any state this client does not know; handled like `Error`.
    #[serde(other)]
    Unknown,
}

impl DocumentState {
    /// `true` while DeepL is still working on the document.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Queued | Self::Translating)
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Queued => "queued",
            Self::Translating => "translating",
            Self::Done => "done",
            Self::Error => "error",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One status poll. Each poll replaces the previous one entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentStatus {
    pub status: DocumentState,
    #[serde(default)]
    pub seconds_remaining: Option<u64>,
    #[serde(default)]
    pub billed_characters: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl DocumentStatus {
    /// A status with only the state set.
    pub const fn new(status: DocumentState) -> Self {
        Self {
            status,
            seconds_remaining: None,
            billed_characters: None,
            error_message: None,
        }
    }
}

/// Result of a direct text translation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextTranslation {
    pub text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

/// Everything the document upload endpoint needs.
#[derive(Debug, Clone, Copy)]
pub struct DocumentUpload<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
    pub target_lang: &'a str,
    pub glossary_id: Option<&'a str>,
}

/// Body of the status and result requests.
#[derive(Debug, Serialize)]
pub(crate) struct DocumentKeyRequest<'a> {
    pub document_key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranslateTextRequest<'a> {
    pub text: [&'a str; 1],
    pub target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateTextResponse {
    pub translations: Vec<TextTranslation>,
}
