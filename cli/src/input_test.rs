use super::*;
use portal::types::EventDraft;

// =============================================================
// --data
// =============================================================

#[test]
fn read_object_accepts_inline_json() {
    let map = read_object(r#"{"titulo":"Meetup"}"#).expect("object");
    assert_eq!(map.get("titulo"), Some(&Value::from("Meetup")));
}

#[test]
fn read_object_reads_at_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("event.json");
    std::fs::write(&path, r#"{"local":"Insper"}"#).expect("write");

    let map = read_object(&format!("@{}", path.display())).expect("object");
    assert_eq!(map.get("local"), Some(&Value::from("Insper")));
}

#[test]
fn read_object_rejects_non_objects() {
    assert!(matches!(read_object("[1,2]"), Err(CliError::Input(_))));
    assert!(matches!(read_object("{oops"), Err(CliError::Input(_))));
}

#[test]
fn merge_overrides_only_given_keys() {
    let base = EventDraft {
        titulo: "Hackathon".to_owned(),
        local: "Insper".to_owned(),
        ..EventDraft::default()
    };
    let patch = read_object(r#"{"local":"Online","destaque":true}"#).expect("object");

    let merged = merge(&base, patch).expect("merge");
    assert_eq!(merged.titulo, "Hackathon");
    assert_eq!(merged.local, "Online");
    assert!(merged.destaque);
}

#[test]
fn merge_reports_wrong_field_types() {
    let patch = read_object(r#"{"destaque":"sim"}"#).expect("object");
    assert!(matches!(merge(&EventDraft::default(), patch), Err(CliError::Input(_))));
}

// =============================================================
// Images
// =============================================================

#[test]
fn image_content_type_by_extension() {
    assert_eq!(image_content_type(Path::new("logo.PNG")), Some("image/png"));
    assert_eq!(image_content_type(Path::new("a/b/photo.jpeg")), Some("image/jpeg"));
    assert_eq!(image_content_type(Path::new("notes.txt")), None);
    assert_eq!(image_content_type(Path::new("README")), None);
}

#[test]
fn read_image_builds_image_part() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("banner.webp");
    std::fs::write(&path, [1_u8, 2, 3]).expect("write");

    let part = read_image(&path).expect("part");
    assert_eq!(part.field, "image");
    assert_eq!(part.file_name, "banner.webp");
    assert_eq!(part.content_type, "image/webp");
    assert_eq!(part.bytes, vec![1, 2, 3]);
}

#[test]
fn read_image_rejects_other_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "x").expect("write");
    assert!(matches!(read_image(&path), Err(CliError::Input(_))));
}
