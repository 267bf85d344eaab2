//! Page Configuration
//!
//! Values the server injects into the page, read once at startup and
//! passed down explicitly afterwards.

use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::i18n::Lang;
use crate::upload::UploadPolicy;

/// Role of the logged-in user. Only gates what the UI offers;
/// the server decides what is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Administrator,
    Editor,
    #[default]
    User,
}

impl Role {
    /// Unknown roles get the least privilege
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Administrator" => Role::Administrator,
            "Editor" => Role::Editor,
            _ => Role::User,
        }
    }

    pub fn can_edit_inventory(self) -> bool {
        matches!(self, Role::Administrator | Role::Editor)
    }

    pub fn can_manage_users(self) -> bool {
        self == Role::Administrator
    }
}

/// Which page the bundle was loaded on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Inventory,
    Events,
    EventDetail(u32),
    Users,
}

impl Screen {
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "/home" => Some(Screen::Inventory),
            "/events" => Some(Screen::Events),
            "/users" => Some(Screen::Users),
            _ => path
                .strip_prefix("/event_detail/")
                .and_then(|id| id.parse().ok())
                .map(Screen::EventDetail),
        }
    }
}

/// Optional `window.APP_CONFIG` object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InjectedConfig {
    pub api_base: Option<String>,
    pub log_level: Option<String>,
    pub upload_mime: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub role: Role,
    pub lang: Lang,
    pub api_base: String,
    pub log_level: Level,
    pub upload_policy: UploadPolicy,
    pub screen: Option<Screen>,
}

impl PageConfig {
    pub fn from_parts(
        role: Option<&str>,
        injected: InjectedConfig,
        origin: &str,
        path: &str,
        language: &str,
    ) -> Self {
        let log_level = injected
            .log_level
            .as_deref()
            .and_then(|l| Level::from_str(l).ok())
            .unwrap_or(Level::INFO);
        let upload_policy = injected
            .upload_mime
            .map(UploadPolicy::new)
            .unwrap_or_default();
        Self {
            role: role.map(Role::parse).unwrap_or_default(),
            lang: Lang::detect(language),
            api_base: injected.api_base.unwrap_or_else(|| origin.to_string()),
            log_level,
            upload_policy,
            screen: Screen::from_path(path),
        }
    }

    /// Read the page-injected globals
    pub fn from_window() -> Self {
        let role = read_global("USER_ROLE").and_then(|v| v.as_string());
        let injected = read_global("APP_CONFIG")
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
            .unwrap_or_default();
        let window = web_sys::window();
        let location = window.as_ref().map(|w| w.location());
        let origin = location.as_ref().and_then(|l| l.origin().ok()).unwrap_or_default();
        let path = location.as_ref().and_then(|l| l.pathname().ok()).unwrap_or_default();
        let language = window
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();
        Self::from_parts(role.as_deref(), injected, &origin, &path, &language)
    }
}

/// Read a top-level binding. Goes through `Function` so that `const`
/// declarations in page scripts, which are not `window` properties, resolve too.
fn read_global(name: &str) -> Option<JsValue> {
    let body = format!("return typeof {0} === 'undefined' ? null : {0};", name);
    let value = js_sys::Function::new_no_args(&body).call0(&JsValue::NULL).ok()?;
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Administrator"), Role::Administrator);
        assert_eq!(Role::parse(" Editor "), Role::Editor);
        assert_eq!(Role::parse("User"), Role::User);
        assert_eq!(Role::parse("root"), Role::User);
        assert!(Role::Editor.can_edit_inventory());
        assert!(!Role::User.can_edit_inventory());
        assert!(!Role::Editor.can_manage_users());
    }

    #[test]
    fn test_screen_from_path() {
        assert_eq!(Screen::from_path("/home"), Some(Screen::Inventory));
        assert_eq!(Screen::from_path("/events/"), Some(Screen::Events));
        assert_eq!(Screen::from_path("/users"), Some(Screen::Users));
        assert_eq!(Screen::from_path("/event_detail/17"), Some(Screen::EventDetail(17)));
        assert_eq!(Screen::from_path("/event_detail/abc"), None);
        assert_eq!(Screen::from_path("/login"), None);
    }

    #[test]
    fn test_from_parts_defaults() {
        let cfg = PageConfig::from_parts(None, InjectedConfig::default(), "http://inv.local", "/home", "de-DE");
        assert_eq!(cfg.role, Role::User);
        assert_eq!(cfg.lang, Lang::De);
        assert_eq!(cfg.api_base, "http://inv.local");
        assert_eq!(cfg.log_level, Level::INFO);
        assert_eq!(cfg.upload_policy, UploadPolicy::default());
        assert_eq!(cfg.screen, Some(Screen::Inventory));
    }

    #[test]
    fn test_from_parts_injected_overrides() {
        let injected = InjectedConfig {
            api_base: Some("http://api.local".into()),
            log_level: Some("debug".into()),
            upload_mime: Some("image/png".into()),
        };
        let cfg = PageConfig::from_parts(Some("Editor"), injected, "http://inv.local", "/events", "en");
        assert_eq!(cfg.role, Role::Editor);
        assert_eq!(cfg.api_base, "http://api.local");
        assert_eq!(cfg.log_level, Level::DEBUG);
        assert_eq!(cfg.upload_policy, UploadPolicy::new("image/png"));
    }
}
