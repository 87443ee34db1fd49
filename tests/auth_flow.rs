//! Login, logout and view composition through the public API.

use std::cell::Cell;
use std::rc::Rc;

use research_portal::auth::{
    password_digest, AccountDirectory, AuthError, AuthHolder, AuthState, LoginRequest,
};
use research_portal::config::AccountConfig;
use research_portal::model::Role;
use research_portal::prefs::{PreferenceStore, StorageBackend, StorageError, LAST_ROLE_KEY};
use research_portal::routing::{compose_view, AppPath, ViewDecision};
use research_portal::theme::{ThemeController, ThemeMode};

fn accounts() -> Vec<AccountConfig> {
    vec![
        AccountConfig {
            id: "p-100".into(),
            username: "mcurie".into(),
            display_name: "Marie Curie".into(),
            email: "mcurie@uni.edu".into(),
            role: Role::Professor,
            password_sha256: password_digest("radium"),
            avatar: None,
        },
        AccountConfig {
            id: "s-200".into(),
            username: "alovelace".into(),
            display_name: "Ada Lovelace".into(),
            email: "alovelace@uni.edu".into(),
            role: Role::Student,
            password_sha256: password_digest("engine"),
            avatar: None,
        },
    ]
}

fn holder(store: Rc<PreferenceStore>) -> AuthHolder {
    AuthHolder::new(store, Rc::new(AccountDirectory::new(accounts())))
}

/// Fails every call and counts how often it was asked
#[derive(Default)]
struct ThrowingStore {
    calls: Rc<Cell<u32>>,
}

impl StorageBackend for ThrowingStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        self.calls.set(self.calls.get() + 1);
        Err(StorageError::Backend("SecurityError".into()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.calls.set(self.calls.get() + 1);
        Err(StorageError::QuotaExceeded)
    }

    fn delete(&self, _key: &str) -> Result<(), StorageError> {
        self.calls.set(self.calls.get() + 1);
        Err(StorageError::Unavailable)
    }
}

#[test]
fn professor_login_then_logout() {
    let store = Rc::new(PreferenceStore::in_memory());
    let mut auth = holder(store.clone());

    let identity = auth
        .login(&LoginRequest::new("mcurie", "radium").with_role(Role::Professor))
        .unwrap();
    assert_eq!(identity.role, Role::Professor);
    assert_eq!(auth.state().role(), Some(Role::Professor));
    assert_eq!(store.get(LAST_ROLE_KEY).as_deref(), Some("professor"));

    auth.logout();
    assert_eq!(*auth.state(), AuthState::Unauthenticated);
    assert!(auth.identity().is_none());
    // The last role survives logout so the login page keeps its theme
    assert_eq!(auth.restore_role(), Some(Role::Professor));
}

#[test]
fn bad_password_keeps_current_identity() {
    let mut auth = holder(Rc::new(PreferenceStore::in_memory()));
    auth.login(&LoginRequest::new("alovelace", "engine")).unwrap();

    let err = auth
        .login(&LoginRequest::new("mcurie", "polonium"))
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(auth.state().role(), Some(Role::Student));
}

#[test]
fn view_composer_scenarios() {
    let mut auth = holder(Rc::new(PreferenceStore::in_memory()));

    assert_eq!(
        compose_view(auth.state(), "/dashboard/student"),
        ViewDecision::Redirect("/login".into())
    );

    auth.login(&LoginRequest::new("alovelace", "engine")).unwrap();
    assert_eq!(
        compose_view(auth.state(), "/dashboard/professor"),
        ViewDecision::Redirect("/dashboard/student".into())
    );
    assert_eq!(
        compose_view(auth.state(), "/dashboard/student/courses/ml-101"),
        ViewDecision::Render(AppPath::Course {
            role: Some(Role::Student),
            id: "ml-101".into()
        })
    );
    assert_eq!(
        compose_view(auth.state(), "/login"),
        ViewDecision::Render(AppPath::Login)
    );
}

#[test]
fn storage_failures_never_escape() {
    let backend = ThrowingStore::default();
    let calls = backend.calls.clone();
    let store = Rc::new(PreferenceStore::new(backend));

    store.set("anything", "value");
    assert_eq!(store.get("anything"), None);
    store.remove("anything");

    let mut theme = ThemeController::load(store.clone());
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(theme.role(), Role::Student);
    assert_eq!(theme.toggle_mode(), ThemeMode::Dark);
    assert_eq!(theme.mode(), ThemeMode::Dark);

    let mut auth = holder(store);
    assert!(auth.restore_role().is_none());
    auth.login(&LoginRequest::new("mcurie", "radium")).unwrap();
    assert_eq!(auth.state().role(), Some(Role::Professor));

    assert!(calls.get() >= 6);
}
