use crate::{
    client_utils::{get_json, post_multipart},
    ArtifactRequest, ArtifactText, BackendResult, DocumentUpload, StudyBackend, UploadReceipt,
};
use reqwest::{multipart, Client};

/// Address the original deployment serves the API from.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub struct HttpStudyBackend {
    pub base_url: String,
    pub client: Client,
}

pub struct HttpStudyBackendOptions {
    pub base_url: Option<String>,
}

impl HttpStudyBackend {
    #[must_use]
    pub fn new(options: HttpStudyBackendOptions) -> Self {
        Self {
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl StudyBackend for HttpStudyBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn upload_document(&self, upload: DocumentUpload) -> BackendResult<UploadReceipt> {
        let mime = mime_guess::from_path(&upload.file_name).first_or_octet_stream();
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(mime.essence_str())?;
        let form = multipart::Form::new().part("file", part);

        tracing::debug!(file_name = %upload.file_name, "uploading document");
        let receipt: UploadReceipt = post_multipart(
            &self.client,
            &format!("{}/api/upload", self.base_url),
            form,
        )
        .await?;
        tracing::debug!(doc_id = %receipt.doc_id, "document uploaded");
        Ok(receipt)
    }

    async fn generate_artifact(&self, request: ArtifactRequest) -> BackendResult<ArtifactText> {
        let url = format!("{}/api/{}", self.base_url, request.kind.path_segment());
        tracing::debug!(kind = request.kind.label(), doc_id = %request.doc_id, "requesting artifact");
        let body: serde_json::Value = get_json(
            &self.client,
            &url,
            &[("doc_id", request.doc_id.as_str())],
        )
        .await?;
        Ok(ArtifactText::from_value(request.kind, &body))
    }
}
