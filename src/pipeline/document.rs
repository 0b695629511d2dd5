use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::deepl::{
    DeeplApi, DeeplError, DocumentHandle, DocumentState, DocumentStatus, DocumentUpload,
};
use crate::fs::atomic_write;
use crate::input::SourceDocument;
use crate::paths::document_output_path;
use crate::status;
use crate::ui::Spinner;

/// Fixed wait between two status requests for the same document.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How a document translation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The translated document was written to this path.
    Saved(PathBuf),
    /// DeepL reported a failure; nothing was downloaded.
    Failed(String),
}

/// Upload, poll and download for a single document.
pub struct DocumentPipeline<'a, A: ?Sized> {
    api: &'a A,
    glossary_id: Option<&'a str>,
}

impl<'a, A> DocumentPipeline<'a, A>
where
    A: DeeplApi + ?Sized,
{
    pub const fn new(api: &'a A, glossary_id: Option<&'a str>) -> Self {
        Self { api, glossary_id }
    }

    /// Translates `source` as a document into `target_lang`.
    ///
    /// HTTP failures of any of the three calls are returned as errors. A
    /// translation DeepL itself gives up on is an `Ok(DocumentOutcome::Failed)`.
    pub async fn run(
        &self,
        source: &SourceDocument,
        target_lang: &str,
    ) -> Result<DocumentOutcome> {
        let file_name = source.file_name();
        let upload = DocumentUpload {
            file_name: &file_name,
            bytes: source.bytes(),
            target_lang,
            glossary_id: self.glossary_id,
        };

        let spinner = Spinner::new("Uploading document...");
        let handle = self.api.upload_document(upload).await?;
        spinner.stop();

        let status = self.wait_for_completion(&handle).await?;

        if status.status != DocumentState::Done {
            let message = status
                .error_message
                .unwrap_or_else(|| "Unknown error".to_string());
            return Ok(DocumentOutcome::Failed(message));
        }

        if let Some(billed) = status.billed_characters {
            status!("Billed characters: {billed}");
        }

        let spinner = Spinner::new("Downloading translated document...");
        let content = self.api.download_document(&handle).await?;
        spinner.stop();

        let output_path = document_output_path(source.path())
            .context("Failed to determine the current directory")?;
        atomic_write(&output_path, &content)?;

        Ok(DocumentOutcome::Saved(output_path))
    }

    /// Polls the status endpoint until the document leaves `queued`/`translating`.
    ///
    /// Sleeps [`POLL_INTERVAL`] between consecutive requests and returns the
    /// first non-pending status.
    pub async fn wait_for_completion(
        &self,
        handle: &DocumentHandle,
    ) -> Result<DocumentStatus, DeeplError> {
        loop {
            let status = self.api.document_status(handle).await?;
            println!("Translation status: {}", status.status);

            if !status.status.is_pending() {
                return Ok(status);
            }

            match status.seconds_remaining {
                Some(seconds) if seconds > 0 => {
                    println!("Estimated time remaining: {seconds} seconds");
                }
                _ => println!("Waiting for translation to start..."),
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
