use crate::error::SessionError;
use crate::provider::{Credentials, SessionProvider};
use ahub_kernel::domain::config::SessionConfig;
use ahub_kernel::domain::session::{Session, SessionUser};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The observable session.
///
/// Starts in the loading state. Every change is published to subscribers, so route guards
/// re-evaluate on each transition. Clones share the same state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    state: watch::Sender<Arc<Session>>,
    bootstrap_timeout: Option<Duration>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SessionStore {
    /// A loading store. `bootstrap_timeout` bounds [`SessionStore::bootstrap`]; `None` waits
    /// as long as the provider takes.
    #[must_use]
    pub fn new(bootstrap_timeout: Option<Duration>) -> Self {
        let (state, _) = watch::channel(Arc::new(Session::loading()));
        Self { inner: Arc::new(StoreInner { state, bootstrap_timeout }) }
    }

    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.bootstrap_timeout_ms.map(Duration::from_millis))
    }

    #[must_use]
    pub fn bootstrap_timeout(&self) -> Option<Duration> {
        self.inner.bootstrap_timeout
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn current(&self) -> Arc<Session> {
        Arc::clone(&self.inner.state.borrow())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    /// Receives every later transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Session>> {
        self.inner.state.subscribe()
    }

    /// Waits until the bootstrap check has resolved.
    pub async fn resolved(&self) -> Arc<Session> {
        let mut rx = self.subscribe();
        match rx.wait_for(|session| !session.loading).await {
            Ok(session) => Arc::clone(&session),
            Err(_) => self.current(),
        }
    }

    /// Runs the app-start check once and leaves the loading state.
    ///
    /// A failed or timed-out check still resolves the session, as signed out, so the guard can
    /// move on to the login page. Calling this after the session resolved is a no-op.
    ///
    /// # Errors
    /// [`SessionError::BootstrapTimeout`] when the configured timeout elapses, or the provider's
    /// own error.
    pub async fn bootstrap<P: SessionProvider>(&self, provider: &P) -> Result<(), SessionError> {
        if !self.is_loading() {
            debug!("Session already resolved, skipping bootstrap");
            return Ok(());
        }

        let outcome = match self.inner.bootstrap_timeout {
            Some(limit) => tokio::time::timeout(limit, provider.restore()).await.map_err(|_| {
                SessionError::BootstrapTimeout {
                    message: format!("no answer after {} ms", limit.as_millis()).into(),
                    context: None,
                }
            }),
            None => Ok(provider.restore().await),
        };

        match outcome {
            Ok(Ok(user)) => {
                self.settle(user);
                Ok(())
            }
            Ok(Err(err)) | Err(err) => {
                warn!(%err, "Session bootstrap failed, continuing signed out");
                self.settle(None);
                Err(err)
            }
        }
    }

    /// Signs in through the provider and publishes the new user.
    ///
    /// # Errors
    /// The provider's error; the session is left unchanged.
    pub async fn sign_in<P: SessionProvider>(
        &self,
        provider: &P,
        credentials: Credentials,
    ) -> Result<SessionUser, SessionError> {
        let user = provider.sign_in(credentials).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Signs out. The session is cleared before the provider is told, so the UI never waits on it.
    ///
    /// # Errors
    /// The provider's error; the local session is signed out regardless.
    pub async fn sign_out<P: SessionProvider>(&self, provider: &P) -> Result<(), SessionError> {
        self.set_user(None);
        provider.sign_out().await.inspect_err(|err| warn!(%err, "Provider sign-out failed"))
    }

    /// Publishes a resolved session for `user` (`None` = signed out).
    pub fn set_user(&self, user: Option<SessionUser>) {
        log_transition(user.as_ref());
        self.inner.state.send_replace(Arc::new(resolved_session(user)));
    }

    /// Resolves only if still loading, so a sign-in that raced the bootstrap is kept.
    fn settle(&self, user: Option<SessionUser>) {
        self.inner.state.send_if_modified(|session| {
            if !session.loading {
                return false;
            }
            log_transition(user.as_ref());
            *session = Arc::new(resolved_session(user));
            true
        });
    }
}

fn resolved_session(user: Option<SessionUser>) -> Session {
    user.map_or_else(Session::anonymous, Session::authenticated)
}

fn log_transition(user: Option<&SessionUser>) {
    match user {
        Some(user) if user.role.is_none() => {
            warn!(user = %user.user_id, "Session signed in with an unrecognised role, using the fallback menu");
        }
        Some(user) => info!(user = %user.user_id, role = ?user.role, "Session signed in"),
        None => info!("Session signed out"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let store = SessionStore::default();
        assert!(store.is_loading());
        assert_eq!(*store.current(), Session::loading());
    }

    #[test]
    fn test_set_user_resolves() {
        let store = SessionStore::default();
        store.set_user(Some(SessionUser::new("u-1", ahub_kernel::domain::role::Role::Merchant)));
        assert!(store.current().is_authenticated());

        store.set_user(None);
        assert_eq!(*store.current(), Session::anonymous());
    }

    #[test]
    fn test_settle_ignores_resolved_sessions() {
        let store = SessionStore::default();
        store.set_user(None);
        store.settle(Some(SessionUser::new("late", ahub_kernel::domain::role::Role::Admin)));
        assert!(!store.current().is_authenticated());
    }

    #[test]
    fn test_timeout_from_config() {
        let config = SessionConfig { bootstrap_timeout_ms: Some(1500) };
        assert_eq!(SessionStore::from_config(&config).bootstrap_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(SessionStore::from_config(&SessionConfig::default()).bootstrap_timeout(), None);
    }
}
