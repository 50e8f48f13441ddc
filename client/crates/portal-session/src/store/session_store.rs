use crate::{SessionError, SessionEvent, SessionResult, SessionStorage};

use portal_api::{ApiClient, SessionHandle};
use portal_core::{BearerToken, Session, SessionState, StoredSession, UserProfile};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error, info, warn};
use tokio::sync::{broadcast, watch};

const EVENT_CAPACITY: usize = 16;

struct Inner {
    state: SessionState,
    /// Attached during restore before the state leaves `Loading`.
    token: Option<BearerToken>,
}

/// Single source of truth for who is logged in.
///
/// Shared as `Arc<SessionStore>` and handed to [`ApiClient`] as its
/// [`SessionHandle`]. The lock is never held across an `.await`.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    inner: RwLock<Inner>,
    state_tx: watch::Sender<SessionState>,
    events_tx: broadcast::Sender<SessionEvent>,
    restore_started: AtomicBool,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Loading);
        let (events_tx, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            storage,
            inner: RwLock::new(Inner {
                state: SessionState::Loading,
                token: None,
            }),
            state_tx,
            events_tx,
            restore_started: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.read().state.clone()
    }

    /// Identity and token together, or anonymous.
    pub fn session(&self) -> Session {
        let inner = self.read();
        match (&inner.state, &inner.token) {
            (SessionState::Authenticated(user), Some(token)) => {
                Session::authenticated(user.clone(), token.clone())
            }
            _ => Session::anonymous(),
        }
    }

    /// Receiver that always holds the latest state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    /// Rebuild the session from storage and confirm it with the backend.
    ///
    /// Only the first call does any work; later calls return the current
    /// state. A backend answer that arrives after the store left `Loading`
    /// is discarded.
    pub async fn restore(&self, api: &ApiClient) -> SessionState {
        if self.restore_started.swap(true, Ordering::SeqCst) {
            debug!("Session restore already ran");
            return self.state();
        }

        let record = match self.storage.load() {
            Ok(record) => record.filter(|r| !r.token.is_empty()),
            Err(e) if e.leaves_corrupt_record() => {
                error!("Stored session is corrupted and could not be moved aside: {e}");
                None
            }
            Err(e) => {
                warn!("Could not read stored session: {e}");
                None
            }
        };

        let Some(StoredSession { user: cached, token }) = record else {
            info!("No stored session");
            let mut inner = self.write();
            if inner.state.is_loading() {
                self.transition(&mut inner, SessionState::Unauthenticated);
            }
            return inner.state.clone();
        };

        {
            let mut inner = self.write();
            if !inner.state.is_loading() {
                return inner.state.clone();
            }
            inner.token = Some(token.clone());
        }

        let outcome = api.current_user().await;

        let mut inner = self.write();
        if !inner.state.is_loading() {
            debug!("Session changed during restore; discarding backend answer");
            return inner.state.clone();
        }

        match outcome {
            Ok(Some(user)) => {
                let record = StoredSession::new(user.clone(), token);
                if let Err(e) = self.storage.save(&record) {
                    warn!("Could not persist refreshed profile: {e}");
                }
                info!("Session restored for user {}", user.id);
                self.transition(&mut inner, SessionState::Authenticated(user));
                self.publish(SessionEvent::Refreshed);
            }
            Ok(None) => {
                info!("Session restored from cache for user {}", cached.id);
                self.transition(&mut inner, SessionState::Authenticated(cached));
            }
            Err(e) => {
                // 401 has already gone through `authorization_failed`; this is
                // everything else. The stored record is kept for the next start.
                warn!("Session restore failed, continuing signed out: {e}");
                inner.token = None;
                self.transition(&mut inner, SessionState::Unauthenticated);
            }
        }

        inner.state.clone()
    }

    /// Persist and open a session from a successful login.
    pub fn login(&self, identity: UserProfile, token: BearerToken) -> SessionResult<()> {
        if token.is_empty() {
            return Err(SessionError::empty_token());
        }

        let mut inner = self.write();
        self.storage
            .save(&StoredSession::new(identity.clone(), token.clone()))?;

        info!("User {} logged in", identity.id);
        inner.token = Some(token);
        self.transition(&mut inner, SessionState::Authenticated(identity));
        self.publish(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Close the session. Returns `true` only when this call did the closing.
    pub fn logout(&self) -> bool {
        let mut inner = self.write();

        if let Err(e) = self.storage.clear() {
            warn!("Could not clear stored session: {e}");
        }

        let was_open = inner.token.is_some() || !matches!(inner.state, SessionState::Unauthenticated);
        inner.token = None;

        if !was_open {
            debug!("Logout with no open session");
            return false;
        }

        info!("User logged out");
        self.transition(&mut inner, SessionState::Unauthenticated);
        self.publish(SessionEvent::LoggedOut);
        true
    }

    /// Replace the identity with a backend copy while a session is open.
    pub fn refresh_identity(&self, profile: UserProfile) -> bool {
        let mut inner = self.write();

        let token = match (&inner.state, &inner.token) {
            (SessionState::Authenticated(_), Some(token)) => token.clone(),
            _ => return false,
        };

        if let Err(e) = self.storage.save(&StoredSession::new(profile.clone(), token)) {
            warn!("Could not persist refreshed profile: {e}");
        }

        self.transition(&mut inner, SessionState::Authenticated(profile));
        self.publish(SessionEvent::Refreshed);
        true
    }

    fn transition(&self, inner: &mut Inner, next: SessionState) {
        inner.state = next.clone();
        self.state_tx.send_replace(next);
    }

    fn publish(&self, event: SessionEvent) {
        // No receivers is fine.
        let _ = self.events_tx.send(event);
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionHandle for SessionStore {
    fn bearer_token(&self) -> Option<BearerToken> {
        self.read().token.clone()
    }

    fn authorization_failed(&self) {
        self.logout();
    }

    fn identity_refreshed(&self, profile: &UserProfile) {
        if !self.refresh_identity(profile.clone()) {
            debug!("Ignoring profile refresh outside an open session");
        }
    }
}
