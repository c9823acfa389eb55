//! Organization contact details and the public contact form.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::{ContactInfo, NewContactMessage};

const INFO: &str = "/contatos";
const SEND: &str = "/contatos/mensagem";

pub const FALLBACK_NOTICE: &str = "Não foi possível carregar os contatos atualizados. Exibindo informações padrão.";

/// Contact details plus a notice when they are the built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub info: ContactInfo,
    pub notice: Option<String>,
}

impl ContactDetails {
    /// Built-in defaults with the notice every public page shows for them.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            info: ContactInfo::fallback(),
            notice: Some(FALLBACK_NOTICE.to_owned()),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn info<B: Backend>(backend: &mut B) -> Result<ContactInfo, RequestError> {
    backend.send(ApiRequest::get(INFO)).await?.into_data()
}

/// [`info`], falling back to [`ContactInfo::fallback`] on any failure.
pub async fn info_or_fallback<B: Backend>(backend: &mut B) -> ContactDetails {
    match info(backend).await {
        Ok(info) => ContactDetails { info, notice: None },
        Err(err) => {
            tracing::warn!(error = %err, "contact info unavailable; using defaults");
            ContactDetails::fallback()
        }
    }
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn update_info<B: Backend>(backend: &mut B, info: &ContactInfo) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::put(INFO).json(info)?.authenticated()).await
}

/// Submit the public contact form.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn send_message<B: Backend>(backend: &mut B, message: &NewContactMessage) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::post(SEND).json(message)?).await
}
