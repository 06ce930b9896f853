use crate::{ArtifactRequest, ArtifactText, BackendResult, DocumentUpload, UploadReceipt};

/// A StudyPal backend: ingests documents and generates study artifacts
/// for them.
#[async_trait::async_trait]
pub trait StudyBackend: Send + Sync {
    /// Short identifier for the implementation, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Upload a document and receive the identifier that correlates
    /// subsequent artifact requests with it.
    async fn upload_document(&self, upload: DocumentUpload) -> BackendResult<UploadReceipt>;

    /// Fetch one artifact for a previously uploaded document.
    async fn generate_artifact(&self, request: ArtifactRequest) -> BackendResult<ArtifactText>;
}
