//! Role-aware theme resolution.
//!
//! Each role owns a fixed token set; the light/dark mode only picks the
//! rendering algorithm. `resolve_theme` is pure, and `ThemeController` wraps
//! it with the persisted (role, mode) pair.

use std::fmt::Write as _;
use std::rc::Rc;

use crate::model::Role;
use crate::prefs::{PreferenceStore, LAST_ROLE_KEY, THEME_MODE_KEY};

/// Light/dark preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Which rendering algorithm the component library applies to the tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderAlgorithm {
    Default,
    Dark,
}

impl RenderAlgorithm {
    /// CSS `color-scheme` value
    pub fn color_scheme(&self) -> &'static str {
        match self {
            RenderAlgorithm::Default => "light",
            RenderAlgorithm::Dark => "dark",
        }
    }
}

/// Static visual tokens for one role
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeTokens {
    pub primary_color: &'static str,
    pub success_color: &'static str,
    pub warning_color: &'static str,
    pub error_color: &'static str,
    pub info_color: &'static str,
    pub border_radius: u8,
    pub font_family: &'static str,
    pub font_size: u8,
    pub line_height: f32,
    /// h1..h5
    pub heading_sizes: [u8; 5],
}

const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";
const SERIF_STACK: &str = "Georgia, 'Times New Roman', serif";

const PROFESSOR_TOKENS: ThemeTokens = ThemeTokens {
    primary_color: "#1d4ed8",
    success_color: "#15803d",
    warning_color: "#d97706",
    error_color: "#dc2626",
    info_color: "#0284c7",
    border_radius: 6,
    font_family: SERIF_STACK,
    font_size: 14,
    line_height: 1.6,
    heading_sizes: [36, 30, 24, 20, 16],
};

const STUDENT_TOKENS: ThemeTokens = ThemeTokens {
    primary_color: "#16a34a",
    success_color: "#22c55e",
    warning_color: "#f59e0b",
    error_color: "#ef4444",
    info_color: "#3b82f6",
    border_radius: 10,
    font_family: FONT_STACK,
    font_size: 14,
    line_height: 1.5715,
    heading_sizes: [38, 30, 24, 20, 16],
};

const SECRETARY_TOKENS: ThemeTokens = ThemeTokens {
    primary_color: "#7c3aed",
    success_color: "#16a34a",
    warning_color: "#ea580c",
    error_color: "#e11d48",
    info_color: "#6366f1",
    border_radius: 4,
    font_family: FONT_STACK,
    font_size: 13,
    line_height: 1.5,
    heading_sizes: [32, 26, 22, 18, 15],
};

const LEADER_TOKENS: ThemeTokens = ThemeTokens {
    primary_color: "#b45309",
    success_color: "#059669",
    warning_color: "#ca8a04",
    error_color: "#b91c1c",
    info_color: "#0e7490",
    border_radius: 8,
    font_family: SERIF_STACK,
    font_size: 15,
    line_height: 1.6,
    heading_sizes: [40, 32, 26, 21, 17],
};

/// Token set for a role
pub fn role_tokens(role: Role) -> &'static ThemeTokens {
    match role {
        Role::Professor => &PROFESSOR_TOKENS,
        Role::Student => &STUDENT_TOKENS,
        Role::Secretary => &SECRETARY_TOKENS,
        Role::Leader => &LEADER_TOKENS,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub tokens: ThemeTokens,
    pub algorithm: RenderAlgorithm,
}

impl ResolvedTheme {
    /// Render tokens as CSS custom properties for the root element's `style`
    pub fn css_variables(&self) -> String {
        let t = &self.tokens;
        let mut css = String::new();
        let _ = write!(
            css,
            "--portal-primary: {}; --portal-success: {}; --portal-warning: {}; \
             --portal-error: {}; --portal-info: {}; --portal-radius: {}px; \
             --portal-font-family: {}; --portal-font-size: {}px; --portal-line-height: {};",
            t.primary_color,
            t.success_color,
            t.warning_color,
            t.error_color,
            t.info_color,
            t.border_radius,
            t.font_family,
            t.font_size,
            t.line_height,
        );
        for (level, size) in t.heading_sizes.iter().enumerate() {
            let _ = write!(css, " --portal-h{}: {}px;", level + 1, size);
        }
        let _ = write!(css, " color-scheme: {};", self.algorithm.color_scheme());
        css
    }
}

/// Pure (role, mode) -> theme mapping
pub fn resolve_theme(role: Role, mode: ThemeMode) -> ResolvedTheme {
    let algorithm = match mode {
        ThemeMode::Light => RenderAlgorithm::Default,
        ThemeMode::Dark => RenderAlgorithm::Dark,
    };
    ResolvedTheme {
        tokens: *role_tokens(role),
        algorithm,
    }
}

/// Same as [`resolve_theme`] for an unvalidated role name; unknown names get
/// the student theme.
pub fn resolve_theme_named(role: &str, mode: ThemeMode) -> ResolvedTheme {
    resolve_theme(Role::parse(role).unwrap_or_default(), mode)
}

/// Current (role, mode) pair backed by the preference store
#[derive(Clone, Debug)]
pub struct ThemeController {
    store: Rc<PreferenceStore>,
    role: Role,
    mode: ThemeMode,
}

impl ThemeController {
    /// Light mode and the student role, without touching storage. Server
    /// renders and the first client render both start here.
    pub fn new(store: Rc<PreferenceStore>) -> Self {
        Self {
            store,
            role: Role::default(),
            mode: ThemeMode::default(),
        }
    }

    /// Seed from persisted values; invalid or missing entries fall back to
    /// light mode and the student role.
    pub fn load(store: Rc<PreferenceStore>) -> Self {
        let mut theme = Self::new(store);
        theme.reload();
        theme
    }

    /// Re-read the persisted mode and role
    pub fn reload(&mut self) {
        self.mode = self
            .store
            .get(THEME_MODE_KEY)
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or_default();
        self.role = self
            .store
            .get(LAST_ROLE_KEY)
            .and_then(|v| Role::parse(&v))
            .unwrap_or_default();
        tracing::debug!("Theme seeded: role={} mode={}", self.role, self.mode.as_str());
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn resolved(&self) -> ResolvedTheme {
        resolve_theme(self.role, self.mode)
    }

    /// Flip light/dark and persist the new mode
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.store.set(THEME_MODE_KEY, self.mode.as_str());
        self.mode
    }

    pub fn set_role(&mut self, role: Role) {
        if self.role != role {
            self.role = role;
            self.store.set(LAST_ROLE_KEY, role.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::tests::BrokenBackend;

    const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    #[test]
    fn primary_color_depends_only_on_role() {
        for role in Role::ALL {
            let expected = role_tokens(role).primary_color;
            for mode in MODES {
                assert_eq!(resolve_theme(role, mode).tokens.primary_color, expected);
            }
        }
        assert_eq!(resolve_theme(Role::Professor, ThemeMode::Dark).tokens.primary_color, "#1d4ed8");
        assert_eq!(resolve_theme(Role::Student, ThemeMode::Light).tokens.primary_color, "#16a34a");
    }

    #[test]
    fn algorithm_is_dark_iff_mode_is_dark() {
        for role in Role::ALL {
            assert_eq!(resolve_theme(role, ThemeMode::Dark).algorithm, RenderAlgorithm::Dark);
            assert_eq!(resolve_theme(role, ThemeMode::Light).algorithm, RenderAlgorithm::Default);
        }
    }

    #[test]
    fn unknown_role_name_uses_student_theme() {
        for mode in MODES {
            assert_eq!(
                resolve_theme_named("admin", mode),
                resolve_theme_named("student", mode)
            );
        }
        assert_eq!(
            resolve_theme_named("leader", ThemeMode::Light),
            resolve_theme(Role::Leader, ThemeMode::Light)
        );
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let mut theme = ThemeController::load(Rc::new(PreferenceStore::in_memory()));
        let original = theme.mode();
        theme.toggle_mode();
        assert_ne!(theme.mode(), original);
        theme.toggle_mode();
        assert_eq!(theme.mode(), original);
    }

    #[test]
    fn load_reads_persisted_values() {
        let store = Rc::new(PreferenceStore::in_memory());
        store.set(THEME_MODE_KEY, "dark");
        store.set(LAST_ROLE_KEY, "secretary");

        let theme = ThemeController::load(store);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.role(), Role::Secretary);
        assert_eq!(theme.resolved(), resolve_theme(Role::Secretary, ThemeMode::Dark));
    }

    #[test]
    fn new_ignores_storage_until_reload() {
        let store = Rc::new(PreferenceStore::in_memory());
        store.set(THEME_MODE_KEY, "dark");
        store.set(LAST_ROLE_KEY, "leader");

        let mut theme = ThemeController::new(store);
        assert_eq!(theme.resolved(), resolve_theme(Role::Student, ThemeMode::Light));

        theme.reload();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.role(), Role::Leader);
    }

    #[test]
    fn load_discards_invalid_values() {
        let store = Rc::new(PreferenceStore::in_memory());
        store.set(THEME_MODE_KEY, "sepia");
        store.set(LAST_ROLE_KEY, "admin");

        let theme = ThemeController::load(store);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.role(), Role::Student);
    }

    #[test]
    fn toggle_persists_mode() {
        let store = Rc::new(PreferenceStore::in_memory());
        let mut theme = ThemeController::load(store.clone());
        theme.toggle_mode();
        assert_eq!(store.get(THEME_MODE_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeController::load(store);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn broken_store_keeps_in_memory_state() {
        let mut theme = ThemeController::load(Rc::new(PreferenceStore::new(BrokenBackend)));
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.role(), Role::Student);

        assert_eq!(theme.toggle_mode(), ThemeMode::Dark);
        theme.set_role(Role::Leader);
        assert_eq!(theme.resolved(), resolve_theme(Role::Leader, ThemeMode::Dark));
    }

    #[test]
    fn css_variables_include_tokens_and_scheme() {
        let css = resolve_theme(Role::Leader, ThemeMode::Dark).css_variables();
        assert!(css.contains("--portal-primary: #b45309;"));
        assert!(css.contains("--portal-h1: 40px;"));
        assert!(css.contains("--portal-h5: 17px;"));
        assert!(css.ends_with("color-scheme: dark;"));
    }
}
