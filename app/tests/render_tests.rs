use std::path::PathBuf;
use studypal_app::{render, ViewState};
use studypal_sdk::ArtifactText;

#[test]
fn generate_controls_are_disabled_until_a_document_exists() {
    let state = ViewState::default();
    let page = render(&state);
    assert!(page.contains("File: (none)"));
    assert!(page.contains("summary (disabled)"));
    assert!(page.contains("mcqs (disabled)"));
    assert!(page.contains("flashcards (disabled)"));

    let state = ViewState {
        selected_file: Some(PathBuf::from("notes.pdf")),
        doc_id: Some("abc123".to_string()),
        ..ViewState::default()
    };
    let page = render(&state);
    assert!(page.contains("File: notes.pdf"));
    assert!(page.contains("Document: abc123"));
    assert!(!page.contains("(disabled)"));
}

#[test]
fn loading_line_appears_exactly_while_loading() {
    let state = ViewState {
        loading: true,
        ..ViewState::default()
    };
    assert!(render(&state).contains("Generating content..."));

    let state = ViewState::default();
    assert!(!render(&state).contains("Generating content..."));
}

#[test]
fn artifact_blocks_render_only_when_text_is_present_and_non_empty() {
    let state = ViewState {
        summary: Some(ArtifactText::Structured("X is about Y.".to_string())),
        mcqs: Some(ArtifactText::Structured(String::new())),
        ..ViewState::default()
    };
    let page = render(&state);
    assert!(page.contains("## Summary"));
    assert!(page.contains("X is about Y."));
    assert!(!page.contains("## MCQs"));
    assert!(!page.contains("## Flashcards"));
}

#[test]
fn fallback_text_is_shown_verbatim() {
    let body = r#"{"questions":["What is alpha?"]}"#;
    let state = ViewState {
        doc_id: Some("abc123".to_string()),
        mcqs: Some(ArtifactText::Fallback(body.to_string())),
        ..ViewState::default()
    };
    let page = render(&state);
    assert!(page.contains("## MCQs"));
    assert!(page.contains(body));
}
