use notegenius_core::{import_text_file, Dashboard, ImportError, NoteDraft, UserProfile};
use std::fs;

#[test]
fn txt_file_is_read_fully_with_title_hint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekly sync.txt");
    fs::write(&path, "Line one.\nLine two with more words.\n").unwrap();

    let imported = import_text_file(&path).unwrap();
    assert_eq!(imported.title_hint, "weekly sync");
    assert_eq!(imported.content, "Line one.\nLine two with more words.\n");
}

#[test]
fn non_text_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.png");
    fs::write(&path, [0x89_u8, 0x50, 0x4e, 0x47]).unwrap();

    let err = import_text_file(&path).unwrap_err();
    match err {
        ImportError::UnsupportedType { mime, .. } => {
            assert_eq!(mime.as_deref(), Some("image/png"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = import_text_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}

#[test]
fn imported_text_flows_into_a_saved_note() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ideas.txt");
    fs::write(&path, "Ship the importer. Write the docs afterwards.").unwrap();

    let mut dashboard = Dashboard::new(UserProfile {
        email: "x@example.com".to_string(),
        name: "X".to_string(),
    });
    dashboard.start_new_note();

    let mut draft: NoteDraft = dashboard.editor_draft();
    draft.apply_import(import_text_file(&path).unwrap());
    let note = dashboard.save_draft(&draft).unwrap();

    assert_eq!(note.title, "ideas");
    assert_eq!(note.content, "Ship the importer. Write the docs afterwards.");
}
