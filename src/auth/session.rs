//! Process-wide session store: token lifecycle and user hydration.
//!
//! DESIGN
//! ======
//! The state machine lives in plain [`SessionState`] methods so it can be
//! unit-tested without a browser; [`Session`] is the thin reactive owner
//! that wires those transitions to `localStorage`, the profile endpoint,
//! and a context-provided signal. Every login/logout bumps a generation
//! counter and hydration results are committed only if their generation is
//! still current, so a profile fetch that resolves after a newer login or
//! a logout is discarded instead of applied.
//!
//! States: unauthenticated (no token, no user), hydrating (token present,
//! `loading` set), authenticated (token valid, user populated). Any decode,
//! expiry, or fetch failure degrades to unauthenticated and evicts the
//! persisted token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::claims::{Claims, ClaimsError};
use crate::auth::token;
use crate::net::api::{self, ApiError};
use crate::net::types::{Profile, User};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Claims(#[from] ClaimsError),
    #[error("token is expired")]
    Expired,
    #[error("profile fetch failed: {0}")]
    Profile(#[from] ApiError),
}

/// Shared authentication state. `user` is only ever populated while a
/// token that was valid at hydration time is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    generation: u64,
}

impl SessionState {
    /// Startup state: loading until the persisted token has been resolved,
    /// so gates wait instead of bouncing a valid session to the login page.
    pub fn hydrating() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Adopt a new token and enter the hydrating state. Returns the
    /// generation the eventual commit must present.
    pub(crate) fn begin_hydration(&mut self, new_token: String) -> u64 {
        self.generation += 1;
        self.token = Some(new_token);
        // A user derived from a previous token is no longer authoritative.
        self.user = None;
        self.loading = true;
        self.generation
    }

    /// Commit a hydration outcome. A stale commit (the session has moved on
    /// since `started`) changes nothing and returns `false`.
    pub(crate) fn finish_hydration(&mut self, started: u64, user: Option<User>) -> bool {
        if started != self.generation {
            return false;
        }
        match user {
            Some(user) => self.user = Some(user),
            None => {
                self.token = None;
                self.user = None;
            }
        }
        self.loading = false;
        true
    }

    /// Synchronous reset to unauthenticated. Bumps the generation so any
    /// in-flight hydration is discarded when it lands.
    pub(crate) fn clear(&mut self) {
        self.generation += 1;
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Claims override the profile body for `email` and `role`; the profile
/// supplies everything else.
pub(crate) fn merge_user(profile: Profile, claims: &Claims) -> User {
    User {
        user_id: profile.user_id,
        full_name: profile.full_name.unwrap_or_default(),
        email: claims.email.clone(),
        role: claims.role,
        address: profile.address,
        phone_number: profile.phone_number,
    }
}

async fn resolve_user(token: &str) -> Result<User, SessionError> {
    let claims = Claims::decode(token)?;
    // Checked before any fetch: an expired token must never hydrate,
    // whatever the backend would say.
    if claims.is_expired(js_sys::Date::now()) {
        return Err(SessionError::Expired);
    }
    let profile = api::fetch_profile().await?;
    Ok(merge_user(profile, &claims))
}

/// Injectable session owner, provided once via context and consumed by
/// every page. The signal inside is the single writer of session state.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::hydrating()),
        }
    }

    /// Resolve the persisted token on startup.
    pub fn init(self) {
        match token::load() {
            Some(stored) => self.hydrate(stored),
            None => self.state.update(SessionState::clear),
        }
    }

    /// Reactive reads.
    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Persist a freshly issued token and rehydrate the user from it.
    pub fn login(self, new_token: String) {
        token::save(&new_token);
        self.hydrate(new_token);
    }

    /// Synchronous and idempotent; no network involved.
    pub fn logout(self) {
        token::clear();
        self.state.update(SessionState::clear);
    }

    fn hydrate(self, new_token: String) {
        let started = self
            .state
            .try_update(|s| s.begin_hydration(new_token.clone()))
            .unwrap_or_default();
        spawn_local(async move {
            let user = match resolve_user(&new_token).await {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("session hydration failed: {err}");
                    None
                }
            };
            let evict = user.is_none();
            let applied = self
                .state
                .try_update(|s| s.finish_hydration(started, user))
                .unwrap_or(false);
            if applied && evict {
                token::clear();
            }
        });
    }
}
