use notegenius_core::{ImportedText, Note, NoteDraft, NotePatch};

#[test]
fn note_new_sets_defaults() {
    let note = Note::new("Groceries", "eggs, milk");

    assert!(!note.id.is_nil());
    assert_eq!(note.id.get_version_num(), 7);
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "eggs, milk");
    assert_eq!(note.summary, None);
    assert_eq!(note.created_at, note.updated_at);
    assert!(!note.has_summary());
}

#[test]
fn note_ids_are_unique_per_note() {
    let first = Note::new("a", "a");
    let second = Note::new("b", "b");
    assert_ne!(first.id, second.id);
    assert!(first.created_at <= second.created_at);
}

#[test]
fn patch_updates_only_given_fields() {
    let mut note = Note::new("title", "content");
    NotePatch::summary("A summary.").apply_to(&mut note);

    assert_eq!(note.title, "title");
    assert_eq!(note.content, "content");
    assert_eq!(note.summary.as_deref(), Some("A summary."));
    assert!(note.updated_at >= note.created_at);
}

#[test]
fn serialization_omits_missing_summary() {
    let mut note = Note::new("Title", "Body");
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note.id.to_string());
    assert_eq!(json["title"], "Title");
    assert!(json.get("summary").is_none());
    assert!(json.get("created_at").is_some());

    note.summary = Some("Short.".to_string());
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["summary"], "Short.");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn previews_truncate_by_chars() {
    let short = Note::new("t", "tiny");
    assert_eq!(short.list_preview(), "tiny...");
    assert_eq!(short.detail_preview(), "tiny");

    let long = Note::new("t", "é".repeat(350));
    assert_eq!(long.list_preview().chars().count(), 103);
    let detail = long.detail_preview();
    assert!(detail.ends_with("..."));
    assert_eq!(detail.chars().count(), 303);
}

#[test]
fn import_fills_blank_title_only() {
    let imported = ImportedText {
        title_hint: "meeting".to_string(),
        content: "notes from the meeting".to_string(),
    };

    let mut blank = NoteDraft::new("  ", "old");
    blank.apply_import(imported.clone());
    assert_eq!(blank.title, "meeting");
    assert_eq!(blank.content, "notes from the meeting");

    let mut titled = NoteDraft::new("Kept", "old");
    titled.apply_import(imported);
    assert_eq!(titled.title, "Kept");
    assert_eq!(titled.content, "notes from the meeting");
}
