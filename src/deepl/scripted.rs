//! A DeepL stand-in that replays scripted answers and records every call.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

use super::{
    DeeplApi, DeeplError, DocumentHandle, DocumentState, DocumentStatus, DocumentUpload,
    TextTranslation,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    TranslateText {
        text: String,
        target_lang: String,
    },
    Upload {
        file_name: String,
        target_lang: String,
        glossary_id: Option<String>,
        size: usize,
    },
    Status {
        at: Instant,
    },
    Download,
}

pub struct ScriptedApi {
    translation: String,
    statuses: Mutex<VecDeque<Result<DocumentStatus, DeeplError>>>,
    document: Bytes,
    calls: Mutex<Vec<ApiCall>>,
    before_download: Option<Box<dyn Fn() + Send + Sync>>,
}

#[allow(clippy::unwrap_used)]
impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            translation: String::new(),
            statuses: Mutex::new(VecDeque::new()),
            document: Bytes::new(),
            calls: Mutex::new(Vec::new()),
            before_download: None,
        }
    }

    pub fn with_translation(mut self, text: &str) -> Self {
        self.translation = text.to_string();
        self
    }

    pub fn with_document(mut self, content: &'static [u8]) -> Self {
        self.document = Bytes::from_static(content);
        self
    }

    /// Runs `hook` when the document download is requested, before the
    /// bytes are handed back.
    pub fn with_before_download(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.before_download = Some(Box::new(hook));
        self
    }

    pub fn with_states(self, states: &[DocumentState]) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .extend(states.iter().map(|state| Ok(DocumentStatus::new(*state))));
        self
    }

    pub fn with_status(self, status: DocumentStatus) -> Self {
        self.statuses.lock().unwrap().push_back(Ok(status));
        self
    }

    pub fn with_status_failure(self, status: StatusCode, message: &str) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Err(DeeplError::RemoteService {
                status,
                message: message.to_string(),
            }));
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn status_times(&self) -> Vec<Instant> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Status { at } => Some(at),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    pub fn downloads(&self) -> usize {
        self.count(|call| matches!(call, ApiCall::Download))
    }

    pub fn uploads(&self) -> usize {
        self.count(|call| matches!(call, ApiCall::Upload { .. }))
    }

    pub fn text_translations(&self) -> usize {
        self.count(|call| matches!(call, ApiCall::TranslateText { .. }))
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl DeeplApi for ScriptedApi {
    async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TextTranslation, DeeplError> {
        self.record(ApiCall::TranslateText {
            text: text.to_string(),
            target_lang: target_lang.to_string(),
        });
        Ok(TextTranslation {
            text: self.translation.clone(),
            detected_source_language: None,
        })
    }

    async fn upload_document(
        &self,
        upload: DocumentUpload<'_>,
    ) -> Result<DocumentHandle, DeeplError> {
        self.record(ApiCall::Upload {
            file_name: upload.file_name.to_string(),
            target_lang: upload.target_lang.to_string(),
            glossary_id: upload.glossary_id.map(str::to_string),
            size: upload.bytes.len(),
        });
        Ok(DocumentHandle {
            document_id: "04DE5AD98A02647D83285A36021911C6".to_string(),
            document_key: "0CB0054F1C132C1625B392EADDA41CB754A742822F6877173029A6C487E7F60A"
                .to_string(),
        })
    }

    async fn document_status(
        &self,
        _handle: &DocumentHandle,
    ) -> Result<DocumentStatus, DeeplError> {
        self.record(ApiCall::Status { at: Instant::now() });
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DeeplError::InvalidArgument(
                    "no scripted status left".to_string(),
                ))
            })
    }

    async fn download_document(&self, _handle: &DocumentHandle) -> Result<Bytes, DeeplError> {
        self.record(ApiCall::Download);
        if let Some(hook) = &self.before_download {
            hook();
        }
        Ok(self.document.clone())
    }
}
