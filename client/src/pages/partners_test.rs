use super::*;

#[test]
fn partner_names_are_unique_and_links_absolute() {
    let mut names: Vec<&str> = PARTNERS.iter().map(|p| p.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PARTNERS.len());
    assert!(PARTNERS.iter().all(|p| p.link.starts_with("https://")));
}
