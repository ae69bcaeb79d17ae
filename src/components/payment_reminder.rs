//! Payment Reminder Section
//!
//! Day-of-month reminder the bot sends to drivers, with a manual test fire.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_language, use_toasts};

#[component]
pub fn PaymentReminderSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (reminder_day, set_reminder_day) = signal(1u8);
    let (is_active, set_is_active) = signal(false);
    let (last_sent, set_last_sent) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::settings::payment_reminder().await {
                Ok(settings) => {
                    set_reminder_day.set(settings.reminder_day);
                    set_is_active.set(settings.is_active);
                    set_last_sent.set(settings.last_sent);
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let day = reminder_day.get();
        let active = is_active.get();
        spawn_local(async move {
            match api::settings::update_payment_reminder(day, active).await {
                Ok(response) => {
                    set_reminder_day.set(response.settings.reminder_day);
                    set_is_active.set(response.settings.is_active);
                    set_last_sent.set(response.settings.last_sent);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
            set_saving.set(false);
        });
    };

    let on_test = move |_| {
        spawn_local(async move {
            match api::settings::test_payment_reminder().await {
                Ok(_) => toasts.success(lang.t("settings.reminder_sent")),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.reminder")}</h2>
            <form class="settings-form" on:submit=on_save>
                <label class="field">
                    <span>{move || lang.t("settings.reminder_day")}</span>
                    <input
                        type="number"
                        min="1"
                        max="31"
                        prop:value=move || reminder_day.get().to_string()
                        on:input=move |ev| {
                            if let Ok(day) = event_target_value(&ev).parse::<u8>() {
                                set_reminder_day.set(day.clamp(1, 31));
                            }
                        }
                    />
                </label>
                <label class="field field-inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |_| set_is_active.update(|active| *active = !*active)
                    />
                    <span>{move || lang.t("settings.reminder_active")}</span>
                </label>
                {move || {
                    last_sent
                        .get()
                        .map(|sent| {
                            view! {
                                <p class="field-hint">
                                    {move || lang.t("settings.reminder_last_sent")} ": " {sent.clone()}
                                </p>
                            }
                        })
                }}
                <div class="form-actions">
                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { lang.t("common.saving") } else { lang.t("common.save") }}
                    </button>
                    <button type="button" class="secondary" on:click=on_test>
                        {move || lang.t("settings.reminder_test")}
                    </button>
                </div>
            </form>
        </section>
    }
}
