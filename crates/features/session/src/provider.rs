use crate::error::SessionError;
use ahub_kernel::domain::session::SessionUser;
use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// What the login form submits.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).field("password", &"***").finish()
    }
}

/// The authentication backend.
///
/// The portal never stores tokens or talks to the network itself; it asks a provider, injected
/// at the composition root, and mirrors the answers into a [`SessionStore`](crate::SessionStore).
pub trait SessionProvider: Send + Sync + 'static {
    /// Restores a previous session, if any (the app-start check).
    fn restore(&self) -> impl Future<Output = Result<Option<SessionUser>, SessionError>> + Send;

    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<SessionUser, SessionError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), SessionError>> + Send;
}

/// Provider backed by a fixed account list, for demos and tests.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    accounts: FxHashMap<String, (String, SessionUser)>,
    current: Mutex<Option<SessionUser>>,
    latency: Option<Duration>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account; emails match case-insensitively.
    #[must_use]
    pub fn with_account(
        mut self,
        email: &str,
        password: impl Into<String>,
        user: SessionUser,
    ) -> Self {
        self.accounts.insert(email.trim().to_lowercase(), (password.into(), user));
        self
    }

    /// Starts already signed in as `user`.
    #[must_use]
    pub fn signed_in(self, user: SessionUser) -> Self {
        *self.current.lock() = Some(user);
        self
    }

    /// Delays every answer, like a slow backend.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    #[must_use]
    pub fn current(&self) -> Option<SessionUser> {
        self.current.lock().clone()
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl SessionProvider for InMemoryProvider {
    async fn restore(&self) -> Result<Option<SessionUser>, SessionError> {
        self.wait().await;
        Ok(self.current())
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<SessionUser, SessionError> {
        self.wait().await;

        let user = self
            .accounts
            .get(&credentials.email.trim().to_lowercase())
            .filter(|(password, _)| *password == credentials.password)
            .map(|(_, user)| user.clone())
            .ok_or_else(|| SessionError::Rejected {
                message: "unknown email or wrong password".into(),
                context: Some(credentials.email.clone().into()),
            })?;

        *self.current.lock() = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.wait().await;
        self.current.lock().take();
        Ok(())
    }
}
