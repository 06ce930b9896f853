use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyAppError {
    #[error("Backend error: {0}")]
    Backend(#[from] studypal_sdk::BackendError),
    #[error("Failed to read document: {0}")]
    DocumentRead(#[source] std::io::Error),
}
