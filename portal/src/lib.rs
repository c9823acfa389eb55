//! Shared API access and admin-session core for the Blockchain Insper portal.
//!
//! This crate owns everything the web `client` and the `cli` agree on: the
//! backend response envelope, the request error taxonomy, typed payloads, the
//! HTTP client wrapper, durable session storage, the auth context, and the
//! route-guard decision. It carries no UI and no concrete HTTP stack; callers
//! plug one in through [`transport::Transport`].
//!
//! LAYERS
//! ======
//! `transport` (bytes on the wire) -> `client` (envelope + errors) ->
//! `auth` (token attachment, session lifecycle) -> `endpoints` (typed routes).
//! `guard` is a pure function of the session phase.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod format;
pub mod forms;
pub mod guard;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{AuthContext, Backend};
pub use client::{ApiClient, ApiRequest};
pub use config::ApiConfig;
pub use envelope::ApiResponse;
pub use error::{AuthError, RequestError, StorageError};
pub use session::{AuthPhase, Session, SessionStore};
pub use storage::{MemoryStorage, Storage};
pub use types::{Role, UserProfile};
