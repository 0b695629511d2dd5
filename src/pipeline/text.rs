use anyhow::Result;
use std::path::PathBuf;

use crate::deepl::{DeeplApi, DeeplError};
use crate::fs::atomic_write;
use crate::input::SourceDocument;
use crate::paths::text_output_path;
use crate::status;
use crate::ui::Spinner;

/// Translates the file content in one request and writes it next to the source.
///
/// Returns the path of the new `<stem>_<LANG><ext>` file. The source file is
/// left untouched.
pub async fn translate_text_file<A>(
    api: &A,
    source: &SourceDocument,
    target_lang: &str,
) -> Result<PathBuf>
where
    A: DeeplApi + ?Sized,
{
    let text = source.text().ok_or_else(|| {
        DeeplError::InvalidArgument(format!(
            "{} is not a text file and cannot be translated directly",
            source.path().display()
        ))
    })?;

    let spinner = Spinner::new("Translating text...");
    let translation = api.translate_text(text, target_lang).await?;
    spinner.stop();

    if let Some(detected) = &translation.detected_source_language {
        status!("Detected source language: {detected}");
    }

    let output_path = text_output_path(source.path(), target_lang);
    atomic_write(&output_path, &translation.text)?;

    Ok(output_path)
}
