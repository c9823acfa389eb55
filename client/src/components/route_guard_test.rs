use super::*;

#[test]
fn requested_location_keeps_query() {
    assert_eq!(requested_location("/admin/eventos", ""), "/admin/eventos");
    assert_eq!(requested_location("/admin/eventos", "?page=2"), "/admin/eventos?page=2");
    assert_eq!(requested_location("/admin/eventos", "page=2"), "/admin/eventos?page=2");
}

#[test]
fn status_text_per_decision() {
    assert_eq!(status_text(&GuardDecision::Loading), "Verificando autenticação...");
    assert_eq!(
        status_text(&GuardDecision::Redirect("/admin/login".to_owned())),
        "Redirecionando para o login..."
    );
}
