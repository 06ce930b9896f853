use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the generated outputs the backend can produce for an uploaded
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Summary,
    Mcqs,
    Flashcards,
}

impl ArtifactKind {
    pub const ALL: [Self; 3] = [Self::Summary, Self::Mcqs, Self::Flashcards];

    /// Path segment of the artifact endpoint (`/api/<segment>`).
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Mcqs => "mcqs",
            Self::Flashcards => "flashcards",
        }
    }

    /// Field the backend is expected to place the raw text under.
    #[must_use]
    pub fn response_field(self) -> &'static str {
        match self {
            Self::Summary => "raw_summary",
            Self::Mcqs => "raw_mcqs",
            Self::Flashcards => "raw_flashcards",
        }
    }

    /// Display label used by frontends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Mcqs => "MCQs",
            Self::Flashcards => "Flashcards",
        }
    }
}

/// Raw text of a generated artifact.
///
/// `Structured` carries the kind-specific field the backend is expected
/// to return. `Fallback` carries the whole response body serialized
/// verbatim, used when that field is absent. The fallback is a display
/// path, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArtifactText {
    Structured(String),
    Fallback(String),
}

impl ArtifactText {
    /// Extract the artifact text for `kind` from a response body.
    #[must_use]
    pub fn from_value(kind: ArtifactKind, value: &Value) -> Self {
        match value.get(kind.response_field()).and_then(Value::as_str) {
            Some(text) => Self::Structured(text.to_string()),
            None => Self::Fallback(value.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Fallback(text) => text,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// A local document staged for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Backend acknowledgement of an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Identifier that correlates subsequent artifact requests with the
    /// uploaded content.
    pub doc_id: String,
    /// Leading slice of the extracted document text. Older backends omit
    /// it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Parameters of one artifact fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRequest {
    pub kind: ArtifactKind,
    pub doc_id: String,
}
