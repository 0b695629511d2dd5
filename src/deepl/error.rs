use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while loading a source file or talking to DeepL.
///
/// Only [`DeeplError::FileNotAccessible`] and [`DeeplError::InvalidArgument`]
/// are recoverable: the prompt loop prints them and asks for the next file.
#[derive(Debug, Error)]
pub enum DeeplError {
    #[error("File not found: {}", path.display())]
    FileNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidArgument(String),

    /// Non-2xx answer from any DeepL endpoint.
    #[error("DeepL request failed with status {status}: {message}")]
    RemoteService { status: StatusCode, message: String },

    #[error("Failed to reach DeepL: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DeeplError {
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotAccessible { .. } | Self::InvalidArgument(_)
        )
    }
}
