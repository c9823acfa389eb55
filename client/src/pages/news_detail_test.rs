use super::*;

#[test]
fn paragraphs_drop_blank_lines() {
    assert_eq!(paragraphs("Primeiro.\n\n  Segundo.  \n"), ["Primeiro.", "Segundo."]);
    assert!(paragraphs("   ").is_empty());
}

#[test]
fn placeholder_link_is_hidden() {
    assert_eq!(external_link("#"), None);
    assert_eq!(external_link(""), None);
    assert_eq!(external_link(" https://exame.com/a "), Some("https://exame.com/a"));
}
