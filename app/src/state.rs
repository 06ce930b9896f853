use std::path::PathBuf;
use studypal_sdk::{ArtifactKind, ArtifactText};

/// The whole of the view's state: one struct owned by the session and
/// handed by value to the renderer.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// File picked by the user; replaced wholesale on each pick.
    pub selected_file: Option<PathBuf>,
    /// Identifier returned by the backend after a successful upload.
    /// Gates the three generate actions.
    pub doc_id: Option<String>,
    pub summary: Option<ArtifactText>,
    pub mcqs: Option<ArtifactText>,
    pub flashcards: Option<ArtifactText>,
    /// True while the most recently started artifact request is in
    /// flight. Overlapping requests each clear it on completion, so it
    /// can read false while an earlier request is still outstanding.
    pub loading: bool,
}

impl ViewState {
    #[must_use]
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&ArtifactText> {
        match kind {
            ArtifactKind::Summary => self.summary.as_ref(),
            ArtifactKind::Mcqs => self.mcqs.as_ref(),
            ArtifactKind::Flashcards => self.flashcards.as_ref(),
        }
    }

    pub(crate) fn artifact_slot_mut(&mut self, kind: ArtifactKind) -> &mut Option<ArtifactText> {
        match kind {
            ArtifactKind::Summary => &mut self.summary,
            ArtifactKind::Mcqs => &mut self.mcqs,
            ArtifactKind::Flashcards => &mut self.flashcards,
        }
    }

    /// Whether the generate controls are enabled.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.doc_id.is_some()
    }
}
