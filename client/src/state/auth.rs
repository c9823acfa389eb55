//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`WebAuth`] through context. The route guard reads its
//! phase, the login page and admin layout drive login/logout, and every page
//! that talks to the backend passes it to `portal::endpoints` as the
//! `Backend`.
//!
//! DESIGN
//! ======
//! The portal `AuthContext` is plain data, so it lives in a `StoredValue`.
//! An operation works on a clone and publishes the result back together with
//! the reactive `Session` snapshot. Backend calls publish only when the
//! session actually changed (a 401 ended it), so concurrent page loads never
//! roll a fresher session back. Clones share `localStorage`, and the portal
//! context checks it before dropping a token, so a stale clone adopts the
//! newer stored session instead of erasing it.

use leptos::prelude::*;
use portal::{
    ApiClient, ApiConfig, ApiRequest, ApiResponse, AuthContext, AuthError, AuthPhase, Backend, RequestError,
    Session, UserProfile,
};

use crate::net::transport::FetchTransport;
use crate::util::storage::BrowserStorage;

type BrowserAuth = AuthContext<FetchTransport, BrowserStorage>;

/// Backend location baked in at build time (`API_URL`), else the default.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("API_URL"))
}

#[derive(Clone, Copy)]
pub struct WebAuth {
    session: RwSignal<Session>,
    context: StoredValue<BrowserAuth>,
}

impl WebAuth {
    fn new() -> Self {
        let context = AuthContext::new(ApiClient::new(api_config(), FetchTransport), BrowserStorage);
        Self { session: RwSignal::new(context.session().clone()), context: StoredValue::new(context) }
    }

    /// Create the app-wide instance and put it in context.
    pub fn provide() -> Self {
        let auth = Self::new();
        provide_context(auth);
        auth
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive auth phase.
    pub fn phase(&self) -> AuthPhase {
        self.session.with(Session::phase)
    }

    /// Reactive cached profile.
    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// False until the persisted session has been checked.
    pub fn is_resolved(&self) -> bool {
        self.session.with(Session::is_resolved)
    }

    pub fn config(&self) -> ApiConfig {
        self.context.with_value(|ctx| ctx.client().config().clone())
    }

    fn snapshot(&self) -> BrowserAuth {
        self.context.get_value()
    }

    fn publish(&self, context: BrowserAuth) {
        self.session.set(context.session().clone());
        self.context.set_value(context);
    }

    /// Validate any persisted token; run once after hydration.
    ///
    /// The loaded session is published as `Loading` before `/auth/me` goes
    /// out. A login that lands meanwhile wins over the stale answer.
    pub async fn initialize(self) {
        let mut context = self.snapshot();
        if context.begin_initialize() {
            self.publish(context.clone());
            context.finish_initialize().await;
        }
        self.publish(context);
    }

    /// # Errors
    ///
    /// Returns the login failure; the session is left anonymous.
    pub async fn login(self, email: String, password: String) -> Result<UserProfile, AuthError> {
        let mut context = self.snapshot();
        let result = context.login(&email, &password).await;
        self.publish(context);
        result
    }

    pub fn logout(self) {
        let mut context = self.snapshot();
        if let Err(err) = context.logout() {
            log_warn(&format!("logout left stale storage: {err}"));
        }
        self.publish(context);
    }

    /// Reload the profile after the administrator edited it.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure; a rejected token ends the session.
    pub async fn refresh_profile(self) -> Result<UserProfile, AuthError> {
        let mut context = self.snapshot();
        let result = context.refresh_profile().await;
        self.publish(context);
        result
    }

    /// # Errors
    ///
    /// Returns the backend's refusal message.
    pub async fn change_password(self, current: String, new: String) -> Result<ApiResponse, AuthError> {
        let mut auth = self;
        let mut context = auth.snapshot();
        let before = context.session().clone();
        let result = context.change_password(&current, &new).await;
        auth.publish_if_changed(&before, context);
        result
    }

    fn publish_if_changed(&mut self, before: &Session, context: BrowserAuth) {
        if context.session() != before {
            self.publish(context);
        }
    }
}

impl Backend for WebAuth {
    async fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let mut context = self.snapshot();
        let before = context.session().clone();
        let result = context.send(request).await;
        self.publish_if_changed(&before, context);
        result
    }
}

fn log_warn(message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}
