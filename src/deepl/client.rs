use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::DeeplError;
use super::types::{
    DocumentHandle, DocumentKeyRequest, DocumentStatus, DocumentUpload, TextTranslation,
    TranslateTextRequest, TranslateTextResponse,
};

/// Host used by authentication keys of the DeepL API Free plan.
pub const FREE_API_ENDPOINT: &str = "https://api-free.deepl.com";

/// Host used by DeepL API Pro keys.
pub const PRO_API_ENDPOINT: &str = "https://api.deepl.com";

/// The four DeepL calls the translator relies on.
///
/// [`DeeplClient`] talks HTTP; tests substitute scripted implementations.
#[async_trait]
pub trait DeeplApi: Send + Sync {
    /// Translates `text` in a single blocking round trip.
    async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TextTranslation, DeeplError>;

    /// Uploads a document and starts its translation.
    async fn upload_document(
        &self,
        upload: DocumentUpload<'_>,
    ) -> Result<DocumentHandle, DeeplError>;

    async fn document_status(&self, handle: &DocumentHandle)
    -> Result<DocumentStatus, DeeplError>;

    /// Fetches the translated document. Only valid once the status is `done`.
    async fn download_document(&self, handle: &DocumentHandle) -> Result<Bytes, DeeplError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct DeeplClient {
    client: Client,
    endpoint: String,
    auth_key: String,
}

impl DeeplClient {
    pub fn new(endpoint: String, auth_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            auth_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.auth_key)
    }
}

#[async_trait]
impl DeeplApi for DeeplClient {
    async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TextTranslation, DeeplError> {
        let response = self
            .client
            .post(self.url("/v2/translate"))
            .header("Authorization", self.auth_header())
            .json(&TranslateTextRequest {
                text: [text],
                target_lang,
            })
            .send()
            .await?;

        let body: TranslateTextResponse = parse_json(check_status(response).await?).await?;

        body.translations.into_iter().next().ok_or_else(|| {
            DeeplError::InvalidArgument("DeepL returned no translations".to_string())
        })
    }

    async fn upload_document(
        &self,
        upload: DocumentUpload<'_>,
    ) -> Result<DocumentHandle, DeeplError> {
        let file = Part::bytes(upload.bytes.to_vec()).file_name(upload.file_name.to_string());

        let mut form = Form::new()
            .text("target_lang", upload.target_lang.to_string())
            .part("file", file);

        if let Some(glossary_id) = upload.glossary_id {
            form = form.text("glossary_id", glossary_id.to_string());
        }

        let response = self
            .client
            .post(self.url("/v2/document"))
            .header("Authorization", self.auth_header())
            .multipart(form)
            .send()
            .await?;

        parse_json(check_status(response).await?).await
    }

    async fn document_status(
        &self,
        handle: &DocumentHandle,
    ) -> Result<DocumentStatus, DeeplError> {
        let response = self
            .client
            .post(self.url(&format!("/v2/document/{}", handle.document_id)))
            .header("Authorization", self.auth_header())
            .json(&DocumentKeyRequest {
                document_key: &handle.document_key,
            })
            .send()
            .await?;

        parse_json(check_status(response).await?).await
    }

    async fn download_document(&self, handle: &DocumentHandle) -> Result<Bytes, DeeplError> {
        let response = self
            .client
            .post(self.url(&format!("/v2/document/{}/result", handle.document_id)))
            .header("Authorization", self.auth_header())
            .json(&DocumentKeyRequest {
                document_key: &handle.document_key,
            })
            .send()
            .await?;

        Ok(check_status(response).await?.bytes().await?)
    }
}

/// Turns a non-2xx response into [`DeeplError::RemoteService`].
///
/// DeepL usually explains failures in a JSON `message` field; the raw body is
/// used when it does not.
async fn check_status(response: Response) -> Result<Response, DeeplError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or(body);

    Err(DeeplError::RemoteService { status, message })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, DeeplError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        DeeplError::InvalidArgument(format!("Unexpected response from DeepL: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = DeeplClient::new("https://api-free.deepl.com/".to_string(), "k".to_string());
        assert_eq!(
            client.url("/v2/document"),
            "https://api-free.deepl.com/v2/document"
        );
    }

    #[test]
    fn test_auth_header_format() {
        let client = DeeplClient::new(PRO_API_ENDPOINT.to_string(), "abc:fx".to_string());
        assert_eq!(client.auth_header(), "DeepL-Auth-Key abc:fx");
    }
}
