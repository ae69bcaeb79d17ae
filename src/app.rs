//! Admin Dashboard App
//!
//! Root component: restores the persisted stores, gates on the signed-in
//! session, and switches pages from the sidebar.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{Branding, Language, Toasts};
use crate::components::{Header, Sidebar, ToastHost};
use crate::pages::{
    DashboardPage, DriversPage, LoginPage, OrdersPage, PaymentsPage, RatingsPage, SettingsPage,
    StatisticsPage,
};
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restore());
    provide_context(store);
    provide_context(Language::restore());
    provide_context(Branding::restore());
    provide_context(Toasts::new());

    let logged_in = move || store.user().get().is_some();

    view! {
        <ToastHost />
        <Show when=logged_in fallback=|| view! { <LoginPage /> }>
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <Header />
                    {move || match store.page().get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Drivers => view! { <DriversPage /> }.into_any(),
                        Page::Orders => view! { <OrdersPage /> }.into_any(),
                        Page::Payments => view! { <PaymentsPage /> }.into_any(),
                        Page::Ratings => view! { <RatingsPage /> }.into_any(),
                        Page::Statistics => view! { <StatisticsPage /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
