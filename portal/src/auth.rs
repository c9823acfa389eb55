//! Auth context: login, logout, current user and the initial session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup from an [`ApiClient`] and a [`Storage`], then passed
//! to whatever needs the backend. Pages and CLI commands reach authenticated
//! routes through [`Backend::send`], which attaches the token and drops the
//! session when the backend answers 401.
//!
//! Logout is local only; the token stays valid server-side until it expires.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::client::{ApiClient, ApiRequest};
use crate::envelope::ApiResponse;
use crate::error::{AuthError, RequestError};
use crate::session::{AuthPhase, Session, SessionStore};
use crate::storage::Storage;
use crate::transport::Transport;
use crate::types::{ChangePasswordRequest, LoginRequest, UserProfile};

/// Anything that can run an [`ApiRequest`] on behalf of the current session.
pub trait Backend {
    fn send(&mut self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, RequestError>>;
}

/// Session-aware front door to the backend.
#[derive(Clone, Debug)]
pub struct AuthContext<T, S> {
    client: ApiClient<T>,
    store: SessionStore<S>,
}

impl<T: Transport, S: Storage> AuthContext<T, S> {
    pub fn new(client: ApiClient<T>, storage: S) -> Self {
        Self { client, store: SessionStore::new(storage) }
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Resolve the persisted session, if any.
    ///
    /// With both persisted keys present the session is `Loading` until
    /// `GET /auth/me` answers; success refreshes the cached profile, any
    /// failure clears the token. Always ends `Authenticated` or `Anonymous`.
    pub async fn initialize(&mut self) -> &Session {
        if self.begin_initialize() {
            self.finish_initialize().await;
        }
        self.store.session()
    }

    /// First half of [`Self::initialize`]: load persisted credentials.
    ///
    /// Returns whether a token now awaits validation (phase `Loading`).
    pub fn begin_initialize(&mut self) -> bool {
        let pending = self.store.hydrate();
        if !pending {
            tracing::debug!("no persisted session");
        }
        pending
    }

    /// Second half of [`Self::initialize`]: validate the loaded token.
    ///
    /// If the storage was given a different session while `/auth/me` was in
    /// flight (a login elsewhere), that session wins and the answer for the
    /// old token is dropped.
    pub async fn finish_initialize(&mut self) {
        let result = self.fetch_me().await;
        if self.store.superseded() {
            tracing::debug!("session replaced during validation; adopting stored session");
            self.store.adopt_durable();
            return;
        }

        match result {
            Ok(user) => {
                if let Err(err) = self.store.update_user(user) {
                    tracing::warn!(error = %err, "failed to cache refreshed profile");
                    self.drop_session();
                }
            }
            Err(err) => {
                tracing::info!(error = %err, "persisted session rejected");
                self.drop_session();
            }
        }
    }

    /// Forget a rejected token, unless storage already holds a newer one.
    fn drop_session(&mut self) {
        if self.store.superseded() {
            self.store.adopt_durable();
        } else if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear session");
        }
    }

    /// Exchange credentials for a token and cache the profile.
    ///
    /// # Errors
    ///
    /// Returns the backend's message as [`AuthError::Request`] on rejection,
    /// [`AuthError::MissingField`] when the reply lacks `token` or `user`,
    /// and [`AuthError::Storage`] when the session cannot be persisted. In
    /// every error case nothing is stored.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        self.store.begin_login();
        match self.attempt_login(email, password).await {
            Ok((token, user)) => match self.store.establish(token, user.clone()) {
                Ok(()) => {
                    tracing::info!(user_id = %user.id, role = user.role.as_str(), "admin logged in");
                    Ok(user)
                }
                Err(err) => {
                    self.store.abort_login();
                    Err(err.into())
                }
            },
            Err(err) => {
                self.store.abort_login();
                Err(err)
            }
        }
    }

    async fn attempt_login(&self, email: &str, password: &str) -> Result<(String, UserProfile), AuthError> {
        let request = ApiRequest::post("/auth/login").json(&LoginRequest { email, password })?;
        let envelope = self.client.execute(request, None).await?;

        let token = envelope
            .member_as::<String>("token")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AuthError::MissingField("token"))?;
        let user = envelope
            .member_as::<UserProfile>("user")
            .map_err(|_| AuthError::MissingField("user"))?;
        Ok((token, user))
    }

    /// Forget the session locally.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the durable copy could not be
    /// removed; the in-memory session is cleared regardless.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.clear()?;
        tracing::info!("admin logged out");
        Ok(())
    }

    /// The cached profile, resolving or refreshing it when needed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when a required profile refresh fails.
    pub async fn current_user(&mut self) -> Result<Option<UserProfile>, AuthError> {
        if self.store.session().phase() == AuthPhase::Uninitialized {
            self.initialize().await;
        }
        if self.store.session().is_authenticated() {
            return Ok(self.store.session().user().cloned());
        }
        if self.store.token().is_some() {
            return self.refresh_profile().await.map(Some);
        }
        Ok(None)
    }

    /// Reload the profile from `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend rejects the token (the session
    /// is cleared) or the profile cannot be cached.
    pub async fn refresh_profile(&mut self) -> Result<UserProfile, AuthError> {
        match self.fetch_me().await {
            Ok(user) => {
                self.store.update_user(user.clone())?;
                Ok(user)
            }
            Err(err) => {
                self.drop_session();
                Err(err.into())
            }
        }
    }

    /// `POST /auth/change-password` for the logged-in administrator.
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the change is refused.
    pub async fn change_password(&mut self, current: &str, new: &str) -> Result<ApiResponse, AuthError> {
        let request = ApiRequest::post("/auth/change-password")
            .json(&ChangePasswordRequest { current_password: current, new_password: new })?
            .authenticated();
        Ok(self.send(request).await?)
    }

    async fn fetch_me(&self) -> Result<UserProfile, RequestError> {
        let envelope = self
            .client
            .execute(ApiRequest::get("/auth/me").authenticated(), self.store.token())
            .await?;
        envelope.member_as("user")
    }

    /// Run `request`, attaching the token when it is marked authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] from the client. A 401 on an authenticated
    /// request also clears the session.
    pub async fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let authenticated = request.auth;
        let bearer = if authenticated { self.store.token() } else { None };
        let result = self.client.execute(request, bearer).await;

        if authenticated && self.store.token().is_some() {
            if let Err(err) = &result {
                if err.is_unauthorized() {
                    tracing::info!("backend rejected session token; clearing session");
                    self.drop_session();
                }
            }
        }
        result
    }
}

impl<T: Transport, S: Storage> Backend for AuthContext<T, S> {
    async fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        AuthContext::send(self, request).await
    }
}
