use super::*;

#[test]
fn parse_role_defaults_to_admin() {
    assert_eq!(parse_role("super_admin"), Role::SuperAdmin);
    assert_eq!(parse_role("admin"), Role::Admin);
    assert_eq!(parse_role(""), Role::Admin);
}

#[test]
fn reset_password_is_optional_but_checked() {
    assert_eq!(check_reset_password("  "), Ok(None));
    assert_eq!(check_reset_password("curta"), Err(ValidationError::PasswordTooShort));
    assert_eq!(check_reset_password("longasenha"), Ok(Some("longasenha")));
}
