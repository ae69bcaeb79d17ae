//! Header Component

use leptos::prelude::*;

use crate::components::LanguageToggle;
use crate::context::use_language;
use crate::store::{use_app_store, AppStateStoreFields, Page};

fn title_key(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "nav.dashboard",
        Page::Drivers => "nav.drivers",
        Page::Orders => "nav.orders",
        Page::Payments => "nav.payments",
        Page::Ratings => "nav.ratings",
        Page::Statistics => "nav.statistics",
        Page::Settings => "nav.settings",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let lang = use_language();

    view! {
        <header class="page-header">
            <h1 class="page-title">{move || lang.t(title_key(store.page().get()))}</h1>
            <LanguageToggle />
        </header>
    }
}
