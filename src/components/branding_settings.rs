//! Branding Section
//!
//! Organization name and logo shown in the sidebar. Client-side only:
//! persisted to local storage, never sent to the backend.

use leptos::prelude::*;

use crate::context::{use_branding, use_language, use_toasts};

#[component]
pub fn BrandingSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();
    let branding = use_branding();

    let (org_name, set_org_name) = signal(branding.get().organization_name);
    let (logo, set_logo) = signal(branding.get().logo.unwrap_or_default());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = org_name.get();
        if name.trim().is_empty() {
            toasts.error(lang.t("error.required"));
            return;
        }
        branding.update(|settings| {
            settings.organization_name = name.trim().to_string();
            let logo_value = logo.get();
            settings.logo = if logo_value.trim().is_empty() {
                None
            } else {
                Some(logo_value)
            };
        });
        toasts.success(lang.t("common.saved"));
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.branding")}</h2>
            <form class="settings-form" on:submit=on_save>
                <label class="field">
                    <span>{move || lang.t("settings.org_name")}</span>
                    <input
                        type="text"
                        prop:value=move || org_name.get()
                        on:input=move |ev| set_org_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.logo")}</span>
                    <input
                        type="text"
                        prop:value=move || logo.get()
                        on:input=move |ev| set_logo.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">{move || lang.t("common.save")}</button>
            </form>
        </section>
    }
}
