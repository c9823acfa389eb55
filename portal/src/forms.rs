//! Client-side form validation run before anything is sent.
//!
//! The backend validates again; these checks only save a round trip and give
//! the same messages in the web UI and the CLI.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::types::{AdminUpdate, ContactInfo, EventDraft, NewAdmin, NewContactMessage, NewsDraft};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    Required(&'static str),
    #[error("Email inválido")]
    InvalidEmail,
    #[error("A nova senha e a confirmação devem ser iguais")]
    PasswordMismatch,
    #[error("A senha deve ter pelo menos {MIN_PASSWORD_LEN} caracteres")]
    PasswordTooShort,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn require(values: &[&str], message: &'static str) -> Result<(), ValidationError> {
    if values.iter().all(|v| filled(v)) { Ok(()) } else { Err(ValidationError::Required(message)) }
}

/// Loose shape check: one `@` with text on both sides and a dot in the domain.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain.split('.').filter(|part| !part.is_empty()).count() >= 2
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    require(&[email, password], "Email e senha são obrigatórios")
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_event(draft: &EventDraft) -> Result<(), ValidationError> {
    require(
        &[draft.titulo.as_str(), draft.descricao.as_str(), draft.data.as_str(), draft.local.as_str(), draft.categoria.as_str()],
        "Preencha todos os campos obrigatórios",
    )
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_news(draft: &NewsDraft) -> Result<(), ValidationError> {
    require(
        &[draft.titulo.as_str(), draft.resumo.as_str(), draft.conteudo.as_str(), draft.autor.as_str(), draft.categoria.as_str()],
        "Preencha todos os campos obrigatórios",
    )
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_contact_info(info: &ContactInfo) -> Result<(), ValidationError> {
    require(&[info.email.as_str(), info.telefone.as_str(), info.endereco.as_str()], "Email, telefone e endereço são obrigatórios")
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_contact_message(message: &NewContactMessage) -> Result<(), ValidationError> {
    require(&[message.nome.as_str(), message.email.as_str(), message.mensagem.as_str()], "Nome, email e mensagem são obrigatórios")?;
    if !looks_like_email(&message.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_new_admin(admin: &NewAdmin) -> Result<(), ValidationError> {
    require(&[admin.nome.as_str(), admin.email.as_str()], "Nome e email são obrigatórios")?;
    require(&[admin.senha.as_str()], "Senha é obrigatória para novos administradores")?;
    if admin.senha.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_admin_update(update: &AdminUpdate) -> Result<(), ValidationError> {
    require(&[update.nome.as_str(), update.email.as_str()], "Nome e email são obrigatórios")
}

/// New password plus confirmation; `current` is checked only when given.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first problem found.
pub fn validate_new_password(current: Option<&str>, new: &str, confirm: &str) -> Result<(), ValidationError> {
    let mut fields = vec![new, confirm];
    fields.extend(current);
    require(&fields, "Preencha todos os campos de senha")?;
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
