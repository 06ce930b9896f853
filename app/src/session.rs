use crate::{errors::StudyAppError, state::ViewState};
use futures::lock::Mutex;
use std::{path::PathBuf, sync::Arc};
use studypal_sdk::{ArtifactKind, ArtifactRequest, DocumentUpload, StudyBackend, UploadReceipt};

/// Message shown when upload is invoked with no file selected.
pub const CHOOSE_FILE_NOTICE: &str = "Please choose a file first.";
/// Message shown when a generate action is invoked before any upload.
pub const UPLOAD_FIRST_NOTICE: &str = "Upload a doc first.";

/// What an action did, for the frontend to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A precondition failed; the message must be shown to the user.
    /// No request was made and no state changed.
    Notice(&'static str),
    /// The upload succeeded and the document id is now set.
    Uploaded(UploadReceipt),
    /// The artifact text for `kind` was stored.
    Generated(ArtifactKind),
}

/// Owns the view state and coordinates actions against the backend.
///
/// The state lock is never held across a backend call, so concurrently
/// triggered actions interleave at the network boundary the same way
/// the page's event loop does.
pub struct StudySession {
    backend: Arc<dyn StudyBackend + Send + Sync>,
    state: Mutex<ViewState>,
}

impl StudySession {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend + Send + Sync>) -> Self {
        Self {
            backend,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Snapshot of the current view state for rendering.
    pub async fn state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Replace the selected file. No validation of type or size.
    pub async fn select_file(&self, path: PathBuf) {
        self.state.lock().await.selected_file = Some(path);
    }

    /// Upload the selected document and store the returned id.
    pub async fn upload(&self) -> Result<ActionOutcome, StudyAppError> {
        let Some(path) = self.state.lock().await.selected_file.clone() else {
            return Ok(ActionOutcome::Notice(CHOOSE_FILE_NOTICE));
        };

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(StudyAppError::DocumentRead)?;
        let file_name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        );

        tracing::debug!(backend = self.backend.name(), file = %path.display(), "upload started");
        let receipt = self
            .backend
            .upload_document(DocumentUpload::new(file_name, bytes))
            .await?;

        self.state.lock().await.doc_id = Some(receipt.doc_id.clone());
        Ok(ActionOutcome::Uploaded(receipt))
    }

    /// Fetch one artifact for the uploaded document and store its text.
    pub async fn generate(&self, kind: ArtifactKind) -> Result<ActionOutcome, StudyAppError> {
        let doc_id = {
            let mut state = self.state.lock().await;
            let Some(doc_id) = state.doc_id.clone() else {
                return Ok(ActionOutcome::Notice(UPLOAD_FIRST_NOTICE));
            };
            state.loading = true;
            doc_id
        };

        tracing::debug!(backend = self.backend.name(), kind = kind.label(), %doc_id, "artifact request started");
        // A failed request returns here with `loading` still set; only a
        // completed response clears it.
        let text = self
            .backend
            .generate_artifact(ArtifactRequest { kind, doc_id })
            .await?;

        let mut state = self.state.lock().await;
        *state.artifact_slot_mut(kind) = Some(text);
        state.loading = false;
        Ok(ActionOutcome::Generated(kind))
    }
}
