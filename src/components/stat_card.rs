//! Stat Card Component

use leptos::prelude::*;

/// Single headline figure with an icon and localized caption
#[component]
pub fn StatCard(
    icon: &'static str,
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-icon">{icon}</span>
            <div class="stat-body">
                <span class="stat-value">{move || value.get()}</span>
                <span class="stat-label">{move || label.get()}</span>
            </div>
        </div>
    }
}
