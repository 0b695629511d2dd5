use std::fs;
use std::path::{Path, PathBuf};

use crate::deepl::DeeplError;

/// Files with at most this many characters are also sent through the
/// direct text translation endpoint.
pub const DIRECT_SEND_LIMIT: usize = 50_000;

/// A source file loaded into memory for one loop iteration.
///
/// The file is read exactly once; counting, direct translation and the
/// document upload all work from the same buffer.
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    bytes: Vec<u8>,
    text: Option<String>,
}

impl SourceDocument {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DeeplError::FileNotAccessible`] when the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DeeplError> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(DeeplError::FileNotAccessible { path, source }),
        };
        let text = std::str::from_utf8(&bytes).ok().map(normalize_line_endings);

        Ok(Self { path, bytes, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The file content, when it is UTF-8 text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of characters (not bytes) in the file, counting each line
    /// ending as one character.
    ///
    /// `None` for binary documents such as `.docx` or `.pdf`.
    pub fn character_count(&self) -> Option<usize> {
        self.text.as_ref().map(|text| text.chars().count())
    }

    /// `true` when the file is small enough for direct text translation.
    pub fn fits_direct_send(&self) -> bool {
        self.character_count()
            .is_some_and(|count| count <= DIRECT_SEND_LIMIT)
    }

    /// The name sent along with the document upload.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "document".to_string(), |name| name.to_string_lossy().into_owned())
    }
}

/// Folds `\r\n` and lone `\r` line endings into `\n`.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
