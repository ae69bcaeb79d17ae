//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_branding, use_language, use_toasts};
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields, Page};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let lang = use_language();
    let toasts = use_toasts();
    let branding = use_branding();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            toasts.error(lang.t("error.required"));
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::auth::login(&user, &pass).await {
                Ok(response) => {
                    storage::set(storage::AUTH_TOKEN, &response.token);
                    if let Ok(json) = serde_json::to_string(&response.user) {
                        storage::set(storage::USER_DATA, &json);
                    }
                    store.page().set(Page::Dashboard);
                    store.user().set(Some(response.user));
                }
                Err(error) => {
                    toasts.error(lang.t("login.failed"));
                    toasts.api_error(lang, &error);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-layout">
            <form class="login-card" on:submit=on_submit>
                <h1>{move || branding.get().organization_name}</h1>
                <h2>{move || lang.t("login.title")}</h2>
                <label class="field">
                    <span>{move || lang.t("login.username")}</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || lang.t("login.password")}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() {
                            lang.t("common.loading")
                        } else {
                            lang.t("login.submit")
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
