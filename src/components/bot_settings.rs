//! Bot Settings Section
//!
//! Telegram bot token, admin id, and channel fields. The last saved token
//! is cached locally so the form prefills before the fetch lands.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::settings::BotSettingsUpdate;
use crate::context::{use_language, use_toasts};
use crate::storage;

#[component]
pub fn BotSettingsSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (bot_token, set_bot_token) = signal(storage::get(storage::BOT_TOKEN).unwrap_or_default());
    let (admin_id, set_admin_id) = signal(String::new());
    let (channel_name, set_channel_name) = signal(String::new());
    let (channel_link, set_channel_link) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::settings::bot_settings().await {
                Ok(settings) => {
                    set_bot_token.set(settings.bot_token);
                    set_admin_id.set(settings.admin_id);
                    set_channel_name.set(settings.channel_name);
                    set_channel_link.set(settings.channel_link);
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let token = bot_token.get();
        if token.trim().is_empty() {
            toasts.error(lang.t("error.required"));
            return;
        }
        set_saving.set(true);
        let update = BotSettingsUpdate {
            bot_token: Some(token),
            admin_id: Some(admin_id.get()),
            channel_name: Some(channel_name.get()),
            channel_link: Some(channel_link.get()),
        };
        spawn_local(async move {
            match api::settings::update_bot_settings(&update).await {
                Ok(response) => {
                    storage::set(storage::BOT_TOKEN, &response.settings.bot_token);
                    set_bot_token.set(response.settings.bot_token);
                    set_admin_id.set(response.settings.admin_id);
                    set_channel_name.set(response.settings.channel_name);
                    set_channel_link.set(response.settings.channel_link);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.bot")}</h2>
            <form class="settings-form" on:submit=on_save>
                <label class="field">
                    <span>{move || lang.t("settings.bot_token")}</span>
                    <input
                        type="password"
                        prop:value=move || bot_token.get()
                        on:input=move |ev| set_bot_token.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.admin_id")}</span>
                    <input
                        type="text"
                        prop:value=move || admin_id.get()
                        on:input=move |ev| set_admin_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.channel_name")}</span>
                    <input
                        type="text"
                        prop:value=move || channel_name.get()
                        on:input=move |ev| set_channel_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("settings.channel_link")}</span>
                    <input
                        type="text"
                        prop:value=move || channel_link.get()
                        on:input=move |ev| set_channel_link.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { lang.t("common.saving") } else { lang.t("common.save") }}
                </button>
            </form>
        </section>
    }
}
