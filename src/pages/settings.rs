//! Settings Page
//!
//! Account info plus the settings sections; each section fetches its own
//! resource on mount, so the requests run concurrently.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    BallPackagesSection, BotSettingsSection, BrandingSection, GroupSettingsSection,
    LocationManagementSection, PaymentCardsSection, PaymentReminderSection,
};
use crate::context::{use_language, use_toasts};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let lang = use_language();
    let toasts = use_toasts();

    let (healthy, set_healthy) = signal(None::<bool>);

    // Refresh the cached admin profile alongside the section fetches; the
    // health probe is display-only
    Effect::new(move |_| {
        spawn_local(async move {
            let (user_result, health_result) =
                join!(api::auth::current_user(), api::stats::health());
            match user_result {
                Ok(user) => store.user().set(Some(user)),
                Err(error) => toasts.api_error(lang, &error),
            }
            set_healthy.set(Some(health_result.is_ok()));
        });
    });

    view! {
        <div class="page settings-page">
            <section class="settings-section account-info">
                {move || {
                    store
                        .user()
                        .get()
                        .map(|user| {
                            view! {
                                <p>
                                    <strong>{user.full_name.clone()}</strong>
                                    " @" {user.username.clone()} " · " {user.role.clone()}
                                </p>
                            }
                        })
                }}
                {move || {
                    healthy
                        .get()
                        .map(|ok| {
                            let class = if ok { "health-dot ok" } else { "health-dot down" };
                            view! { <span class=class>{if ok { "●" } else { "○" }}</span> }
                        })
                }}
            </section>

            <BotSettingsSection />
            <GroupSettingsSection />
            <PaymentReminderSection />
            <BallPackagesSection />
            <PaymentCardsSection />
            <LocationManagementSection />
            <BrandingSection />
        </div>
    }
}
