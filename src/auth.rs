//! Authentication state for the current browser session.
//!
//! Two states: unauthenticated, or authenticated with an [`Identity`]. Login
//! goes through an injected [`Authenticator`]; logout always succeeds. Each
//! identity that becomes current records its role as the last-known role so
//! the theme can be restored before the next login.

use std::rc::Rc;

use sha2::{Digest, Sha256};

use crate::config::AccountConfig;
use crate::model::{Identity, Role};
use crate::prefs::{PreferenceStore, LAST_ROLE_KEY};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("This account is not registered as {0}")]
    RoleMismatch(Role),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Role picked on the login form, if any
    pub role: Option<Role>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// Credential check. Synchronous for now; a backend-backed implementation
/// would add a pending state to [`AuthState`] rather than change its shape.
pub trait Authenticator {
    fn authenticate(&self, request: &LoginRequest) -> Result<Identity, AuthError>;
}

/// Hex SHA-256 digest used for stored account passwords
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Authenticator over the configured account list
#[derive(Clone, Debug, Default)]
pub struct AccountDirectory {
    accounts: Vec<AccountConfig>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<AccountConfig>) -> Self {
        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Authenticator for AccountDirectory {
    fn authenticate(&self, request: &LoginRequest) -> Result<Identity, AuthError> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let digest = password_digest(&request.password);
        let account = self
            .accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .filter(|a| a.password_sha256.eq_ignore_ascii_case(&digest))
            .ok_or(AuthError::InvalidCredentials)?;

        if let Some(requested) = request.role {
            if requested != account.role {
                return Err(AuthError::RoleMismatch(requested));
            }
        }

        Ok(account.identity())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Identity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Unauthenticated => None,
            AuthState::Authenticated(identity) => Some(identity),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Single owner of "who is using the app right now"
#[derive(Clone)]
pub struct AuthHolder {
    state: AuthState,
    store: Rc<PreferenceStore>,
    authenticator: Rc<dyn Authenticator>,
}

impl AuthHolder {
    pub fn new(store: Rc<PreferenceStore>, authenticator: Rc<dyn Authenticator>) -> Self {
        Self {
            state: AuthState::Unauthenticated,
            store,
            authenticator,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    /// Authenticate and make the resulting identity current.
    ///
    /// On failure the previous state is kept.
    pub fn login(&mut self, request: &LoginRequest) -> Result<Identity, AuthError> {
        match self.authenticator.authenticate(request) {
            Ok(identity) => {
                tracing::info!(
                    target: "access",
                    "Login succeeded for {} as {}",
                    identity.id,
                    identity.role
                );
                self.make_current(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!(
                    target: "access",
                    "Login failed for {:?}: {}",
                    request.username.trim(),
                    e
                );
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        if let AuthState::Authenticated(identity) = &self.state {
            tracing::info!(target: "access", "Logout for {}", identity.id);
        }
        self.state = AuthState::Unauthenticated;
    }

    /// Role of the last identity seen on this device, for theming before login
    pub fn restore_role(&self) -> Option<Role> {
        self.store
            .get(LAST_ROLE_KEY)
            .and_then(|value| Role::parse(&value))
    }

    /// Force the current identity, bypassing the authenticator.
    ///
    /// Only compiled for tests and integration harnesses.
    #[cfg(any(test, feature = "test-hooks"))]
    pub fn set_identity(&mut self, identity: Identity) {
        tracing::warn!(target: "access", "Identity override to {}", identity.id);
        self.make_current(identity);
    }

    fn make_current(&mut self, identity: Identity) {
        self.store.set(LAST_ROLE_KEY, identity.role.as_str());
        self.state = AuthState::Authenticated(identity);
    }
}

impl std::fmt::Debug for AuthHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHolder")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::tests::BrokenBackend;

    fn account(username: &str, password: &str, role: Role) -> AccountConfig {
        AccountConfig {
            id: format!("{}-id", username),
            username: username.to_string(),
            display_name: format!("{} Example", username),
            email: format!("{}@uni.edu", username),
            role,
            password_sha256: password_digest(password),
            avatar: None,
        }
    }

    fn holder(store: Rc<PreferenceStore>) -> AuthHolder {
        let directory = AccountDirectory::new(vec![
            account("grace", "hopper", Role::Professor),
            account("alan", "turing", Role::Student),
            account("joan", "clarke", Role::Leader),
        ]);
        AuthHolder::new(store, Rc::new(directory))
    }

    #[test]
    fn login_then_logout() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        assert!(!auth.state().is_authenticated());

        let identity = auth
            .login(&LoginRequest::new("grace", "hopper").with_role(Role::Professor))
            .unwrap();
        assert_eq!(identity.role, Role::Professor);
        assert_eq!(auth.state().role(), Some(Role::Professor));

        auth.logout();
        assert_eq!(auth.state(), &AuthState::Unauthenticated);
        assert!(auth.identity().is_none());
    }

    #[test]
    fn bad_password_stays_unauthenticated() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        let err = auth.login(&LoginRequest::new("grace", "wrong")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!auth.state().is_authenticated());
    }

    #[test]
    fn unknown_user_is_invalid_credentials() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        let err = auth.login(&LoginRequest::new("nobody", "hopper")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        assert_eq!(
            auth.login(&LoginRequest::new("  ", "x")).unwrap_err(),
            AuthError::MissingCredentials
        );
        assert_eq!(
            auth.login(&LoginRequest::new("grace", "")).unwrap_err(),
            AuthError::MissingCredentials
        );
    }

    #[test]
    fn requested_role_must_match_account() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        let err = auth
            .login(&LoginRequest::new("alan", "turing").with_role(Role::Professor))
            .unwrap_err();
        assert_eq!(err, AuthError::RoleMismatch(Role::Professor));
        assert!(!auth.state().is_authenticated());
    }

    #[test]
    fn username_match_ignores_case() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        let identity = auth.login(&LoginRequest::new(" Joan ", "clarke")).unwrap();
        assert_eq!(identity.role, Role::Leader);
    }

    #[test]
    fn failed_login_keeps_existing_identity() {
        let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
        auth.login(&LoginRequest::new("alan", "turing")).unwrap();
        assert!(auth.login(&LoginRequest::new("grace", "nope")).is_err());
        assert_eq!(auth.state().role(), Some(Role::Student));
    }

    #[test]
    fn login_records_last_role() {
        let store = Rc::new(PreferenceStore::in_memory());
        let mut auth = holder(store.clone());
        assert_eq!(auth.restore_role(), None);

        auth.login(&LoginRequest::new("joan", "clarke")).unwrap();
        assert_eq!(store.get(LAST_ROLE_KEY).as_deref(), Some("leader"));

        // Survives logout so the theme can be restored before the next login
        auth.logout();
        assert_eq!(auth.restore_role(), Some(Role::Leader));
    }

    #[test]
    fn set_identity_bypasses_authenticator() {
        let store = Rc::new(PreferenceStore::in_memory());
        let mut auth = holder(store.clone());
        auth.set_identity(Identity {
            id: "harness".into(),
            display_name: "Test Harness".into(),
            email: "harness@uni.edu".into(),
            role: Role::Secretary,
            avatar: None,
        });
        assert_eq!(auth.state().role(), Some(Role::Secretary));
        assert_eq!(store.get(LAST_ROLE_KEY).as_deref(), Some("secretary"));
    }

    #[test]
    fn broken_store_does_not_block_login() {
        let mut auth = holder(Rc::new(PreferenceStore::new(BrokenBackend)));
        auth.login(&LoginRequest::new("grace", "hopper")).unwrap();
        assert_eq!(auth.state().role(), Some(Role::Professor));
        assert_eq!(auth.restore_role(), None);
    }
}
