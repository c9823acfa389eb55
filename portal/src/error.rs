//! Error taxonomy shared by the API client, session store and auth context.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, backend-reported failures and authorization failures
//! all collapse into [`RequestError`], whose `Display` is the human-readable
//! message the UI shows. Authorization failures are backend failures with
//! status 401; callers ask [`RequestError::is_unauthorized`] instead of
//! matching on a dedicated variant.

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },
    /// The backend answered and reported failure.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// The backend answered with a body we could not read.
    #[error("{message}")]
    Decode { status: u16, message: String },
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend { status, message: message.into() }
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self::Decode { status, message: message.into() }
    }

    /// Message suitable for a toast or an error banner.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message } | Self::Backend { message, .. } | Self::Decode { message, .. } => message,
        }
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::Backend { status, .. } | Self::Decode { status, .. } => Some(*status),
        }
    }

    /// True when the backend rejected the caller's credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Backend { status: 401, .. })
    }
}

/// Fallback message when the backend fails without saying why.
#[must_use]
pub fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Failure of the durable key-value store behind the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Failure of an auth-context operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The backend reported success but left out a required member.
    #[error("malformed response: missing `{0}`")]
    MissingField(&'static str),
}

impl AuthError {
    /// Message suitable for display, mirroring [`RequestError::message`].
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Request(err) => err.message().to_owned(),
            other => other.to_string(),
        }
    }
}
