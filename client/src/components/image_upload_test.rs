use super::*;

#[test]
fn uploaded_file_name_from_backend_paths() {
    assert_eq!(uploaded_file_name("/uploads/abc.png"), Some("abc.png"));
    assert_eq!(uploaded_file_name("http://localhost:5000/uploads/abc.png"), Some("abc.png"));
}

#[test]
fn pasted_urls_are_not_uploaded_files() {
    assert_eq!(uploaded_file_name("https://cdn.example.com/img/abc.png"), None);
    assert_eq!(uploaded_file_name("/uploads/"), None);
    assert_eq!(uploaded_file_name(""), None);
}
