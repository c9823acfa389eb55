use super::*;

#[test]
fn admins_entry_only_for_super_admin() {
    let labels = |role| admin_nav(role).into_iter().map(|i| i.label).collect::<Vec<_>>();
    assert!(labels(Role::SuperAdmin).contains(&"Administradores"));
    assert!(!labels(Role::Admin).contains(&"Administradores"));
    assert_eq!(labels(Role::Admin).len(), 7);
}

#[test]
fn nav_active_matches_section_and_children() {
    assert!(nav_active("/admin/eventos", "/admin/eventos"));
    assert!(nav_active("/admin/eventos/editar/3", "/admin/eventos"));
    assert!(!nav_active("/admin/eventosx", "/admin/eventos"));
    assert!(!nav_active("/admin/noticias", "/admin/eventos"));
}

#[test]
fn bare_admin_highlights_dashboard() {
    assert!(nav_active("/admin", "/admin/dashboard"));
    assert!(nav_active("/admin/", "/admin/dashboard"));
}
