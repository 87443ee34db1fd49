//! Session handle passed explicitly to every page.
//!
//! Holds the auth holder, theme controller, current path, data source and
//! configuration as signals. Created once by the root component and handed
//! down as a prop; nothing is published through context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::history;
use crate::auth::{AccountDirectory, AuthError, AuthHolder, LoginRequest};
use crate::config::Config;
use crate::data::{DataSource, HttpDataSource, OfflineDataSource};
use crate::model::{Identity, Role};
use crate::prefs::PreferenceStore;
use crate::routing::{default_path, HOME_PATH, LOGIN_PATH};
use crate::theme::{ResolvedTheme, ThemeController, ThemeMode};

#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub auth: Signal<AuthHolder>,
    pub theme: Signal<ThemeController>,
    /// Requested path, before the view composer has looked at it
    pub path: Signal<String>,
    pub data: Signal<Rc<dyn DataSource>>,
    pub config: Signal<Config>,
}

impl Session {
    pub fn identity(&self) -> Option<Identity> {
        self.auth.read().identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.auth.read().state().role()
    }

    pub fn data_source(&self) -> Rc<dyn DataSource> {
        self.data.read().clone()
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.theme.read().resolved()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.read().mode()
    }

    pub fn toggle_theme(&self) {
        let mut theme = self.theme;
        let mode = theme.write().toggle_mode();
        tracing::debug!("Theme mode now {}", mode.as_str());
    }

    /// Follow a link inside the app
    pub fn navigate(&self, to: &str) {
        let mut path = self.path;
        if *path.peek() != to {
            history::push(to);
            path.set(to.to_string());
        }
    }

    /// Swap the current path without a new history entry
    pub fn redirect(&self, to: &str) {
        let mut path = self.path;
        history::replace(to);
        path.set(to.to_string());
    }

    /// Log in, theme the app for the new role and land on its dashboard
    pub fn login(&self, request: &LoginRequest) -> Result<Identity, AuthError> {
        let mut auth = self.auth;
        let mut theme = self.theme;
        let identity = sign_in(&mut auth.write(), &mut theme.write(), request)?;
        self.navigate(&default_path(identity.role));
        Ok(identity)
    }

    pub fn logout(&self) {
        let mut auth = self.auth;
        auth.write().logout();
        self.navigate(LOGIN_PATH);
    }
}

/// Authenticate and switch the theme to the new identity's role. A failed
/// attempt leaves both untouched.
pub fn sign_in(
    auth: &mut AuthHolder,
    theme: &mut ThemeController,
    request: &LoginRequest,
) -> Result<Identity, AuthError> {
    let identity = auth.login(request)?;
    theme.set_role(identity.role);
    Ok(identity)
}

/// Build the session once at the app root.
///
/// Theme and path start from the same defaults the server renders with; the
/// persisted theme and the browser location are applied after hydration.
pub fn use_session(config: Config) -> Session {
    let store = use_hook(|| Rc::new(PreferenceStore::platform()));

    let theme = {
        let store = store.clone();
        use_signal(move || ThemeController::new(store))
    };

    let auth = {
        let accounts = config.accounts.clone();
        use_signal(move || {
            let directory = AccountDirectory::new(accounts);
            if directory.is_empty() {
                tracing::warn!("No accounts configured; every login will be rejected");
            }
            AuthHolder::new(store, Rc::new(directory))
        })
    };

    let data = {
        let config = config.clone();
        use_signal(move || -> Rc<dyn DataSource> {
            match HttpDataSource::from_config(&config) {
                Ok(source) => {
                    tracing::info!("Using backend at {}", source.base());
                    Rc::new(source)
                }
                Err(e) => {
                    tracing::error!("Backend disabled: {}", e);
                    Rc::new(OfflineDataSource)
                }
            }
        })
    };

    let path = use_signal(|| HOME_PATH.to_string());
    let config = use_signal(move || config);

    // Client-side only: restore persisted theme and the real location
    #[cfg(target_arch = "wasm32")]
    {
        let mut theme = theme;
        let mut path = path;
        use_effect(move || {
            theme.write().reload();
            path.set(history::initial_path());
        });
    }

    Session {
        auth,
        theme,
        path,
        data,
        config,
    }
}
