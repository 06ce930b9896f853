use std::{collections::VecDeque, sync::Mutex};

use crate::{
    ArtifactRequest, ArtifactText, BackendError, BackendResult, DocumentUpload, StudyBackend,
    UploadReceipt,
};

/// Result for a mocked `upload_document` call.
/// It can either be a receipt or an error to return.
pub enum MockUploadResult {
    Receipt(UploadReceipt),
    Error(BackendError),
}

impl MockUploadResult {
    /// Construct a result that yields the provided receipt.
    pub fn receipt(receipt: UploadReceipt) -> Self {
        Self::Receipt(receipt)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: BackendError) -> Self {
        Self::Error(error)
    }
}

impl From<UploadReceipt> for MockUploadResult {
    fn from(receipt: UploadReceipt) -> Self {
        Self::receipt(receipt)
    }
}

impl From<BackendResult<UploadReceipt>> for MockUploadResult {
    fn from(result: BackendResult<UploadReceipt>) -> Self {
        match result {
            Ok(receipt) => Self::Receipt(receipt),
            Err(error) => Self::Error(error),
        }
    }
}

/// Result for a mocked `generate_artifact` call.
/// It can either be an artifact text or an error to return.
pub enum MockArtifactResult {
    Text(ArtifactText),
    Error(BackendError),
}

impl MockArtifactResult {
    /// Construct a result that yields the provided artifact text.
    pub fn text(text: ArtifactText) -> Self {
        Self::Text(text)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: BackendError) -> Self {
        Self::Error(error)
    }
}

impl From<ArtifactText> for MockArtifactResult {
    fn from(text: ArtifactText) -> Self {
        Self::text(text)
    }
}

impl From<BackendResult<ArtifactText>> for MockArtifactResult {
    fn from(result: BackendResult<ArtifactText>) -> Self {
        match result {
            Ok(text) => Self::Text(text),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockStudyBackendState {
    mocked_upload_results: VecDeque<MockUploadResult>,
    mocked_artifact_results: VecDeque<MockArtifactResult>,
    tracked_uploads: Vec<DocumentUpload>,
    tracked_artifact_requests: Vec<ArtifactRequest>,
}

impl MockStudyBackendState {
    fn enqueue_upload_result(&mut self, result: MockUploadResult) {
        self.mocked_upload_results.push_back(result);
    }

    fn enqueue_artifact_result(&mut self, result: MockArtifactResult) {
        self.mocked_artifact_results.push_back(result);
    }

    fn reset(&mut self) {
        self.tracked_uploads.clear();
        self.tracked_artifact_requests.clear();
    }

    fn restore(&mut self) {
        self.mocked_upload_results.clear();
        self.mocked_artifact_results.clear();
        self.reset();
    }
}

/// A mock backend for testing that tracks inputs and yields predefined
/// outputs.
pub struct MockStudyBackend {
    name: &'static str,
    state: Mutex<MockStudyBackendState>,
}

impl Default for MockStudyBackend {
    fn default() -> Self {
        Self {
            name: "mock",
            state: Mutex::new(MockStudyBackendState::default()),
        }
    }
}

impl MockStudyBackend {
    /// Construct a new mock backend instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the name reported by the mock.
    pub fn set_name(&mut self, name: &'static str) {
        self.name = name;
    }

    /// Enqueue one or more mocked upload results.
    pub fn enqueue_upload_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockUploadResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.enqueue_upload_result(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked upload result.
    pub fn enqueue_upload<R>(&self, result: R) -> &Self
    where
        R: Into<MockUploadResult>,
    {
        self.enqueue_upload_results(std::iter::once(result.into()))
    }

    /// Enqueue one or more mocked artifact results.
    pub fn enqueue_artifact_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockArtifactResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.enqueue_artifact_result(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked artifact result.
    pub fn enqueue_artifact<R>(&self, result: R) -> &Self
    where
        R: Into<MockArtifactResult>,
    {
        self.enqueue_artifact_results(std::iter::once(result.into()))
    }

    /// Retrieve the tracked uploads accumulated so far.
    #[must_use]
    pub fn tracked_uploads(&self) -> Vec<DocumentUpload> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_uploads.clone()
    }

    /// Retrieve the tracked artifact requests accumulated so far.
    #[must_use]
    pub fn tracked_artifact_requests(&self) -> Vec<ArtifactRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_artifact_requests.clone()
    }

    /// Reset tracked inputs without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked inputs and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl StudyBackend for MockStudyBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn upload_document(&self, upload: DocumentUpload) -> BackendResult<UploadReceipt> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_uploads.push(upload);

        let result = state.mocked_upload_results.pop_front().ok_or_else(|| {
            BackendError::Invariant(self.name, "no mocked upload results available".into())
        })?;

        match result {
            MockUploadResult::Receipt(receipt) => Ok(receipt),
            MockUploadResult::Error(error) => Err(error),
        }
    }

    async fn generate_artifact(&self, request: ArtifactRequest) -> BackendResult<ArtifactText> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_artifact_requests.push(request);

        let result = state.mocked_artifact_results.pop_front().ok_or_else(|| {
            BackendError::Invariant(self.name, "no mocked artifact results available".into())
        })?;

        match result {
            MockArtifactResult::Text(text) => Ok(text),
            MockArtifactResult::Error(error) => Err(error),
        }
    }
}
