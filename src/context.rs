//! Application Context
//!
//! Process-wide stores provided via Leptos Context API: locale, branding,
//! and toast notifications. Each restores itself from local storage at
//! provider mount and persists on every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::i18n::{translate, Locale};
use crate::storage;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

// ========================
// Locale
// ========================

/// Active display locale, persisted under the `locale` key
#[derive(Clone, Copy)]
pub struct Language {
    locale: RwSignal<Locale>,
}

impl Language {
    pub fn restore() -> Self {
        let locale = storage::get(storage::LOCALE)
            .map(|value| Locale::from_str(&value))
            .unwrap_or_default();
        Self {
            locale: RwSignal::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Look up a display string in the active locale
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key)
    }

    pub fn set(&self, locale: Locale) {
        self.locale.set(locale);
        storage::set(storage::LOCALE, locale.as_str());
    }
}

pub fn use_language() -> Language {
    expect_context::<Language>()
}

// ========================
// Branding
// ========================

/// Organization name and logo shown in the sidebar, persisted under
/// `branding_settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingSettings {
    #[serde(default = "default_organization_name")]
    pub organization_name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

fn default_organization_name() -> String {
    "Yol yolakay Admin".to_string()
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            organization_name: default_organization_name(),
            logo: None,
        }
    }
}

impl BrandingSettings {
    /// Restore from the persisted JSON blob. Missing fields take their
    /// defaults; an unparsable blob is ignored entirely.
    pub fn restore(raw: Option<&str>) -> Self {
        raw.and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct Branding {
    settings: RwSignal<BrandingSettings>,
}

impl Branding {
    pub fn restore() -> Self {
        let settings = BrandingSettings::restore(storage::get(storage::BRANDING_SETTINGS).as_deref());
        Self {
            settings: RwSignal::new(settings),
        }
    }

    pub fn get(&self) -> BrandingSettings {
        self.settings.get()
    }

    pub fn update(&self, apply: impl FnOnce(&mut BrandingSettings)) {
        self.settings.update(apply);
        if let Ok(json) = serde_json::to_string(&self.settings.get_untracked()) {
            storage::set(storage::BRANDING_SETTINGS, &json);
        }
    }
}

pub fn use_branding() -> Branding {
    expect_context::<Branding>()
}

// ========================
// Toasts
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of transient notifications; each entry dismisses itself
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });
        let items = self.items;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            items.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Surface an API error as a localized toast
    pub fn api_error(&self, lang: Language, error: &ApiError) {
        self.error(lang.t(error.message_key()));
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_restore_defaults() {
        let branding = BrandingSettings::restore(None);
        assert_eq!(branding.organization_name, "Yol yolakay Admin");
        assert!(branding.logo.is_none());
    }

    #[test]
    fn test_branding_restore_merges_partial_json() {
        let branding = BrandingSettings::restore(Some(r#"{"logo":"data:image/png;base64,xyz"}"#));
        assert_eq!(branding.organization_name, "Yol yolakay Admin");
        assert_eq!(branding.logo.as_deref(), Some("data:image/png;base64,xyz"));
    }

    #[test]
    fn test_branding_restore_ignores_bad_json() {
        let branding = BrandingSettings::restore(Some("not json"));
        assert_eq!(branding, BrandingSettings::default());
    }
}
