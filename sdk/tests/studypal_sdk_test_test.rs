use studypal_sdk::{
    studypal_sdk_test::{MockArtifactResult, MockStudyBackend, MockUploadResult},
    ArtifactKind, ArtifactRequest, ArtifactText, BackendError, DocumentUpload, StudyBackend,
    UploadReceipt,
};

fn receipt(doc_id: &str) -> UploadReceipt {
    UploadReceipt {
        doc_id: doc_id.to_string(),
        preview: None,
    }
}

#[tokio::test]
async fn mock_backend_tracks_uploads_and_returns_results() {
    let backend = MockStudyBackend::new();

    backend
        .enqueue_upload(receipt("doc_1"))
        .enqueue_upload(MockUploadResult::error(BackendError::Invariant(
            "mock",
            "upload error".to_string(),
        )))
        .enqueue_upload(receipt("doc_2"));

    let upload = DocumentUpload::new("notes.txt", b"alpha".to_vec());
    let res = backend
        .upload_document(upload.clone())
        .await
        .expect("first upload should succeed");
    assert_eq!(res, receipt("doc_1"));
    let tracked = backend.tracked_uploads();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0], upload);

    let err = backend
        .upload_document(DocumentUpload::new("notes.txt", b"beta".to_vec()))
        .await
        .expect_err("second upload should fail");
    assert!(matches!(err, BackendError::Invariant("mock", _)));

    let res = backend
        .upload_document(DocumentUpload::new("notes.txt", b"gamma".to_vec()))
        .await
        .expect("third upload should succeed");
    assert_eq!(res.doc_id, "doc_2");
    assert_eq!(backend.tracked_uploads().len(), 3);
}

#[tokio::test]
async fn mock_backend_tracks_artifact_requests_and_returns_results() {
    let backend = MockStudyBackend::new();

    backend
        .enqueue_artifact(ArtifactText::Structured("X is about Y.".to_string()))
        .enqueue_artifact(MockArtifactResult::error(BackendError::Invariant(
            "mock",
            "artifact error".to_string(),
        )));

    let request = ArtifactRequest {
        kind: ArtifactKind::Summary,
        doc_id: "doc_1".to_string(),
    };
    let text = backend
        .generate_artifact(request.clone())
        .await
        .expect("first request should succeed");
    assert_eq!(text, ArtifactText::Structured("X is about Y.".to_string()));

    let err = backend
        .generate_artifact(request.clone())
        .await
        .expect_err("second request should fail");
    assert!(matches!(err, BackendError::Invariant("mock", _)));

    let tracked = backend.tracked_artifact_requests();
    assert_eq!(tracked.len(), 2);
    assert_eq!(tracked[0], request);
}

#[tokio::test]
async fn mock_backend_errors_when_no_result_is_queued() {
    let backend = MockStudyBackend::new();

    let err = backend
        .upload_document(DocumentUpload::new("notes.txt", Vec::new()))
        .await
        .expect_err("empty queue should error");
    assert!(matches!(err, BackendError::Invariant("mock", _)));

    let err = backend
        .generate_artifact(ArtifactRequest {
            kind: ArtifactKind::Flashcards,
            doc_id: "doc_1".to_string(),
        })
        .await
        .expect_err("empty queue should error");
    assert!(matches!(err, BackendError::Invariant("mock", _)));
}

#[tokio::test]
async fn reset_clears_tracked_inputs_and_restore_clears_everything() {
    let backend = MockStudyBackend::new();
    backend
        .enqueue_upload(receipt("doc_1"))
        .enqueue_upload(receipt("doc_2"));

    backend
        .upload_document(DocumentUpload::new("notes.txt", Vec::new()))
        .await
        .expect("upload");
    assert_eq!(backend.tracked_uploads().len(), 1);

    backend.reset();
    assert!(backend.tracked_uploads().is_empty());

    // The second queued result survives a reset.
    backend
        .upload_document(DocumentUpload::new("notes.txt", Vec::new()))
        .await
        .expect("upload after reset");

    backend.restore();
    assert!(backend.tracked_uploads().is_empty());
    let err = backend
        .upload_document(DocumentUpload::new("notes.txt", Vec::new()))
        .await
        .expect_err("restore clears queued results");
    assert!(matches!(err, BackendError::Invariant("mock", _)));
}
