//! Group Settings Section
//!
//! Telegram group ids the bot posts orders and applications into.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_language, use_toasts};
use crate::models::GroupSettings;

#[component]
pub fn GroupSettingsSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (admin_group, set_admin_group) = signal(String::new());
    let (taxi_parcel_group, set_taxi_parcel_group) = signal(String::new());
    let (avia_train_group, set_avia_train_group) = signal(String::new());
    let (cargo_group, set_cargo_group) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::settings::group_settings().await {
                Ok(settings) => {
                    set_admin_group.set(settings.admin_group_id);
                    set_taxi_parcel_group.set(settings.taxi_parcel_group_id);
                    set_avia_train_group.set(settings.avia_train_group_id);
                    set_cargo_group.set(settings.cargo_group_id);
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let settings = GroupSettings {
            admin_group_id: admin_group.get(),
            taxi_parcel_group_id: taxi_parcel_group.get(),
            avia_train_group_id: avia_train_group.get(),
            cargo_group_id: cargo_group.get(),
        };
        spawn_local(async move {
            match api::settings::update_group_settings(&settings).await {
                Ok(saved) => {
                    set_admin_group.set(saved.admin_group_id);
                    set_taxi_parcel_group.set(saved.taxi_parcel_group_id);
                    set_avia_train_group.set(saved.avia_train_group_id);
                    set_cargo_group.set(saved.cargo_group_id);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.groups")}</h2>
            <form class="settings-form" on:submit=on_save>
                <label class="field">
                    <span>{move || lang.t("settings.admin_group")}</span>
                    <input
                        type="text"
                        prop:value=move || admin_group.get()
                        on:input=move |ev| set_admin_group.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.taxi_parcel_group")}</span>
                    <input
                        type="text"
                        prop:value=move || taxi_parcel_group.get()
                        on:input=move |ev| set_taxi_parcel_group.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.avia_train_group")}</span>
                    <input
                        type="text"
                        prop:value=move || avia_train_group.get()
                        on:input=move |ev| set_avia_train_group.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.cargo_group")}</span>
                    <input
                        type="text"
                        prop:value=move || cargo_group.get()
                        on:input=move |ev| set_cargo_group.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { lang.t("common.saving") } else { lang.t("common.save") }}
                </button>
            </form>
        </section>
    }
}
