//! Authentication context and state management.

use crate::backend::api::{AuthApi, HttpAuthApi, LoginCredentials};
use crate::frontend::services::toast::{Notifier, Toast, ToastQueue};
use crate::frontend::services::user::User;
use crate::utils::Result;
use dioxus::prelude::*;
use std::time::Duration;

/// What the auth state currently knows.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    /// Always `user.is_admin()`, kept alongside for cheap reads.
    pub admin: bool,
    pub loading: bool,
}

/// Coarse state derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Loading,
    Authenticated,
}

impl Default for AuthSnapshot {
    // The first check runs on mount, so start out loading.
    fn default() -> Self {
        Self {
            user: None,
            admin: false,
            loading: true,
        }
    }
}

impl AuthSnapshot {
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Loading
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    pub fn set_user(&mut self, user: User) {
        self.admin = user.is_admin();
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        self.user = None;
        self.admin = false;
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}

/// Storage holding the auth snapshot.
pub trait AuthCell: Clone + 'static {
    fn snapshot(&self) -> AuthSnapshot;
    fn update(&mut self, apply: impl FnOnce(&mut AuthSnapshot));
}

impl AuthCell for Signal<AuthSnapshot> {
    fn snapshot(&self) -> AuthSnapshot {
        self.read().clone()
    }

    fn update(&mut self, apply: impl FnOnce(&mut AuthSnapshot)) {
        apply(&mut *self.write());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// Pause before `check_auth` drops the loading flag.
    pub settle_delay: Duration,
    pub toast_auto_close: Duration,
    pub error_toast_auto_close: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(500),
            toast_auto_close: Duration::from_secs(2),
            error_toast_auto_close: Duration::from_secs(5),
        }
    }
}

/// Current user plus the operations that change it.
#[derive(Clone)]
pub struct AuthStore<A, S, N> {
    api: A,
    state: S,
    notifier: N,
    settings: AuthSettings,
}

/// The store as provided to components.
pub type AuthState = AuthStore<HttpAuthApi, Signal<AuthSnapshot>, ToastQueue>;

impl<A: AuthApi, S: AuthCell, N: Notifier> AuthStore<A, S, N> {
    pub const fn new(api: A, state: S, notifier: N, settings: AuthSettings) -> Self {
        Self {
            api,
            state,
            notifier,
            settings,
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.snapshot()
    }

    pub fn user(&self) -> Option<User> {
        self.state.snapshot().user
    }

    pub fn is_admin(&self) -> bool {
        self.state.snapshot().admin
    }

    pub fn clear_user(&mut self) {
        self.state.update(AuthSnapshot::clear_user);
    }

    /// Asks the server whether the session is valid and loads the user if so.
    /// Loading is cleared after the settle delay on every path.
    pub async fn check_auth(&mut self) {
        self.state.update(AuthSnapshot::start_loading);

        match self.api.check_auth().await {
            Ok(reply) if reply.success => self.fetch_user().await,
            Ok(_) => {
                log::debug!("Session is not authenticated");
                self.clear_user();
            }
            Err(e) if e.is_token_missing() => {
                log::debug!("No session token");
                self.clear_user();
            }
            Err(e) => {
                log::error!("Auth check failed: {e}");
                self.clear_user();
            }
        }

        tokio::time::sleep(self.settings.settle_delay).await;
        self.state.update(AuthSnapshot::finish_loading);
    }

    /// Loads the signed-in user. Any failure leaves no user behind.
    pub async fn fetch_user(&mut self) {
        match self.api.read_user().await {
            Ok(reply) => match reply.user {
                Some(user) if reply.success => {
                    log::debug!("Loaded user {}", user.email);
                    self.state.update(|state| state.set_user(user));
                }
                _ => self.clear_user(),
            },
            Err(e) if e.is_token_missing() => {
                log::debug!("No session token");
                self.clear_user();
            }
            Err(e) => {
                log::warn!("Failed to load user: {e}");
                self.clear_user();
                self.notifier.push(
                    Toast::error(e.to_string()).auto_close(self.settings.error_toast_auto_close),
                );
            }
        }

        self.state.update(AuthSnapshot::finish_loading);
    }

    /// Signs in. Errors are returned untouched and leave the state as it was.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<()> {
        let reply = self.api.login(credentials).await?;

        if let Some(user) = reply.user {
            log::info!("Signed in as {}", user.email);
            let greeting = user.welcome_message();
            self.state.update(|state| state.set_user(user));
            self.notifier.dismiss_all();
            self.notifier.push(
                Toast::success(greeting)
                    .auto_close(self.settings.toast_auto_close)
                    .brief(),
            );
        }
        Ok(())
    }

    /// Signs out locally no matter what the server says.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            log::error!("Logout request failed: {e}");
        }

        self.clear_user();
        self.notifier.push(
            Toast::info("Logged out")
                .auto_close(self.settings.toast_auto_close)
                .brief(),
        );
    }
}
