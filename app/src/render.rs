use crate::state::ViewState;
use std::fmt::Write;
use studypal_sdk::ArtifactKind;

/// Render the page for the current state. Pure: no side effects on the
/// state, and the output depends only on the input.
#[must_use]
pub fn render(state: &ViewState) -> String {
    let mut page = String::new();

    let _ = writeln!(page, "StudyPal");
    match &state.selected_file {
        Some(path) => {
            let _ = writeln!(page, "File: {}", path.display());
        }
        None => {
            let _ = writeln!(page, "File: (none)");
        }
    }
    match &state.doc_id {
        Some(doc_id) => {
            let _ = writeln!(page, "Document: {doc_id}");
        }
        None => {
            let _ = writeln!(page, "Document: (not uploaded)");
        }
    }

    let _ = write!(page, "Actions: upload");
    for kind in ArtifactKind::ALL {
        let _ = write!(page, " | {}", kind.path_segment());
        if !state.can_generate() {
            let _ = write!(page, " (disabled)");
        }
    }
    let _ = writeln!(page);

    if state.loading {
        let _ = writeln!(page, "Generating content...");
    }

    for kind in ArtifactKind::ALL {
        if let Some(text) = state.artifact(kind) {
            if !text.as_str().is_empty() {
                let _ = writeln!(page);
                let _ = writeln!(page, "## {}", kind.label());
                let _ = writeln!(page, "{}", text.as_str());
            }
        }
    }

    page
}
