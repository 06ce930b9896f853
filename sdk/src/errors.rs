use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The request to the backend failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-OK status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the backend was missing something the client
    /// relies on.
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type BackendResult<T> = Result<T, BackendError>;
