//! Sidebar Component
//!
//! Branding block, page navigation, and the signed-in admin with logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_branding, use_language};
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields, Page};

const NAV_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "📊", "nav.dashboard"),
    (Page::Drivers, "🚕", "nav.drivers"),
    (Page::Orders, "📦", "nav.orders"),
    (Page::Payments, "💳", "nav.payments"),
    (Page::Ratings, "⭐", "nav.ratings"),
    (Page::Statistics, "📈", "nav.statistics"),
    (Page::Settings, "⚙️", "nav.settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let lang = use_language();
    let branding = use_branding();

    let on_logout = move |_| {
        spawn_local(async move {
            // server-side token invalidation is best effort
            let _ = api::auth::logout().await;
            storage::clear_auth();
            store.user().set(None);
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-branding">
                {move || {
                    branding
                        .get()
                        .logo
                        .map(|logo| view! { <img class="branding-logo" src=logo alt="logo" /> })
                }}
                <span class="branding-name">{move || branding.get().organization_name}</span>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|&(page, icon, key)| {
                        let class = move || {
                            if store.page().get() == page {
                                "nav-item active"
                            } else {
                                "nav-item"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| store.page().set(page)>
                                <span class="nav-icon">{icon}</span>
                                {move || lang.t(key)}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <span class="sidebar-user">
                    {move || store.user().get().map(|user| user.full_name).unwrap_or_default()}
                </span>
                <button class="logout-btn" on:click=on_logout>
                    {move || lang.t("nav.logout")}
                </button>
            </div>
        </aside>
    }
}
