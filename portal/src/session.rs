//! Session store: the only writer of the token and cached profile.
//!
//! DESIGN
//! ======
//! The token and profile live together in one `Option<Credentials>`, so a
//! profile without a token is unrepresentable. Every transition writes
//! durable storage before memory; when a write fails the durable keys are
//! restored to their previous values and memory is left as it was, so both
//! copies move together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::StorageError;
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};
use crate::types::UserProfile;

/// Lifecycle of the session.
///
/// `Uninitialized -> Loading -> {Authenticated, Anonymous}`; logout and
/// rejected tokens move `Authenticated -> Anonymous`; login moves
/// `Anonymous -> Loading -> Authenticated`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Persisted state has not been looked at yet.
    #[default]
    Uninitialized,
    /// Initial resolution or a login call is in flight.
    Loading,
    Authenticated,
    Anonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Credentials {
    token: String,
    user: Option<UserProfile>,
}

/// Read-only snapshot of who is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    phase: AuthPhase,
    credentials: Option<Credentials>,
}

impl Session {
    /// Resolved state with nobody logged in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { phase: AuthPhase::Anonymous, credentials: None }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.credentials.as_ref().and_then(|c| c.user.as_ref())
    }

    /// True during the initial resolution pass or an in-flight login.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Loading
    }

    /// True once initial resolution has finished, whatever its outcome.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated | AuthPhase::Anonymous)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated && self.user().is_some()
    }
}

/// Owns the in-memory [`Session`] and its durable copy.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: Storage> SessionStore<S> {
    /// Wrap `storage`; nothing is read until [`Self::hydrate`].
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    fn read_durable(&self) -> Option<(String, UserProfile)> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable cached profile");
                    None
                }
            });
        token.zip(user)
    }

    /// Load persisted credentials and enter `Loading` if both keys are usable.
    ///
    /// A missing key or an unreadable profile counts as logged out: both keys
    /// are removed and the session resolves to `Anonymous`. Returns whether a
    /// token now awaits validation.
    pub fn hydrate(&mut self) -> bool {
        if let Some((token, user)) = self.read_durable() {
            self.session = Session {
                phase: AuthPhase::Loading,
                credentials: Some(Credentials { token, user: Some(user) }),
            };
            return true;
        }
        if let Err(err) = self.clear() {
            tracing::warn!(error = %err, "failed to clear partial session");
        }
        false
    }

    /// True when the durable token is no longer the one held in memory,
    /// i.e. another holder of the same storage logged in or out meanwhile.
    pub fn superseded(&self) -> bool {
        self.storage.get(TOKEN_KEY).as_deref() != self.token()
    }

    /// Resolve memory to whatever durable storage holds now, without writing.
    ///
    /// Both keys present means `Authenticated`; anything else `Anonymous`.
    pub fn adopt_durable(&mut self) {
        self.session = match self.read_durable() {
            Some((token, user)) => Session {
                phase: AuthPhase::Authenticated,
                credentials: Some(Credentials { token, user: Some(user) }),
            },
            None => Session::anonymous(),
        };
    }

    /// Mark a login call as in flight.
    pub fn begin_login(&mut self) {
        self.session.phase = AuthPhase::Loading;
    }

    /// Return from `Loading` after a failed login, keeping prior credentials.
    pub fn abort_login(&mut self) {
        self.session.phase = if self.session.user().is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        };
    }

    /// Store a fresh token and profile, durable copy first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either key cannot be written; both keys
    /// are then restored to their previous values and the in-memory session
    /// is unchanged.
    pub fn establish(&mut self, token: String, user: UserProfile) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&user).map_err(|err| StorageError::Write(err.to_string()))?;
        let previous = [(TOKEN_KEY, self.storage.get(TOKEN_KEY)), (USER_KEY, self.storage.get(USER_KEY))];
        let written = self
            .storage
            .set(TOKEN_KEY, &token)
            .and_then(|()| self.storage.set(USER_KEY, &user_json));
        if let Err(err) = written {
            for (key, value) in previous {
                let restored = match value {
                    Some(value) => self.storage.set(key, &value),
                    None => self.storage.remove(key),
                };
                if let Err(restore_err) = restored {
                    tracing::warn!(key, error = %restore_err, "failed to restore session key");
                }
            }
            return Err(err);
        }

        self.session = Session {
            phase: AuthPhase::Authenticated,
            credentials: Some(Credentials { token, user: Some(user) }),
        };
        Ok(())
    }

    /// Replace the cached profile for the current token.
    ///
    /// Returns `Ok(false)` without touching anything when no token is held.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the profile cannot be persisted.
    pub fn update_user(&mut self, user: UserProfile) -> Result<bool, StorageError> {
        let Some(credentials) = self.session.credentials.as_mut() else {
            return Ok(false);
        };
        let user_json = serde_json::to_string(&user).map_err(|err| StorageError::Write(err.to_string()))?;
        self.storage.set(USER_KEY, &user_json)?;
        credentials.user = Some(user);
        self.session.phase = AuthPhase::Authenticated;
        Ok(true)
    }

    /// Forget the token and profile, in memory and on disk.
    ///
    /// Memory is always cleared; the first storage error is reported.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a durable key could not be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.session = Session::anonymous();
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}
