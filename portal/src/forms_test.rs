use super::*;
use crate::types::Role;

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("a@b.c", "x"), Ok(()));
    assert_eq!(
        validate_login("  ", "x"),
        Err(ValidationError::Required("Email e senha são obrigatórios"))
    );
}

#[test]
fn event_requires_core_fields_but_not_image() {
    let mut draft = EventDraft {
        titulo: "Hackathon".to_owned(),
        descricao: "48h".to_owned(),
        data: "2024-10-10".to_owned(),
        local: "Insper".to_owned(),
        categoria: "Workshop".to_owned(),
        ..EventDraft::default()
    };
    assert_eq!(validate_event(&draft), Ok(()));

    draft.local.clear();
    assert!(validate_event(&draft).is_err());
}

#[test]
fn news_requires_core_fields() {
    let draft = NewsDraft { titulo: "T".to_owned(), ..NewsDraft::default() };
    assert_eq!(
        validate_news(&draft).map_err(|e| e.to_string()),
        Err("Preencha todos os campos obrigatórios".to_owned())
    );
}

#[test]
fn contact_message_checks_email_shape() {
    let mut message = NewContactMessage {
        nome: "Rui".to_owned(),
        email: "rui@example.com".to_owned(),
        assunto: String::new(),
        mensagem: "Olá".to_owned(),
    };
    assert_eq!(validate_contact_message(&message), Ok(()));

    message.email = "rui at example".to_owned();
    assert_eq!(validate_contact_message(&message), Err(ValidationError::InvalidEmail));
}

#[test]
fn email_shape_examples() {
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.co"));
    assert!(!looks_like_email("a@@b.co"));
    assert!(!looks_like_email("a b@c.co"));
}

#[test]
fn new_admin_needs_long_enough_password() {
    let mut admin = NewAdmin {
        nome: "Bia".to_owned(),
        email: "bia@example.com".to_owned(),
        senha: String::new(),
        role: Role::Admin,
        ativo: true,
    };
    assert_eq!(
        validate_new_admin(&admin),
        Err(ValidationError::Required("Senha é obrigatória para novos administradores"))
    );
    admin.senha = "short".to_owned();
    assert_eq!(validate_new_admin(&admin), Err(ValidationError::PasswordTooShort));
    admin.senha = "longenough".to_owned();
    assert_eq!(validate_new_admin(&admin), Ok(()));
}

#[test]
fn password_change_rules() {
    assert_eq!(
        validate_new_password(Some(""), "abcdefgh", "abcdefgh"),
        Err(ValidationError::Required("Preencha todos os campos de senha"))
    );
    assert_eq!(validate_new_password(None, "abcdefgh", "abcdefgx"), Err(ValidationError::PasswordMismatch));
    assert_eq!(validate_new_password(None, "abc", "abc"), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_new_password(Some("old"), "abcdefgh", "abcdefgh"), Ok(()));
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "A senha deve ter pelo menos 8 caracteres"
    );
}

#[test]
fn admin_update_requires_name_and_email() {
    let update = AdminUpdate { nome: String::new(), email: "x@y.z".to_owned(), role: Role::Admin, ativo: true };
    assert!(validate_admin_update(&update).is_err());
}

#[test]
fn contact_info_requires_reachability() {
    let info = ContactInfo::fallback();
    // The built-in defaults have no phone number.
    assert!(validate_contact_info(&info).is_err());
}
