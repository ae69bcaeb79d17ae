//! Statistics Page
//!
//! Detailed breakdown sections from the admin statistics endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StatCard;
use crate::context::{use_language, use_toasts};
use crate::models::DetailedStatistics;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (stats, set_stats) = signal(None::<DetailedStatistics>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::stats::detailed().await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(error) => toasts.api_error(lang, &error),
            }
            set_loading.set(false);
        });
    });

    let figure = move |pick: fn(&DetailedStatistics) -> String| {
        Signal::derive(move || stats.get().as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div class="page statistics-page">
            <Show when=move || loading.get()>
                <div class="loading">{move || lang.t("common.loading")}</div>
            </Show>

            <section>
                <h2>{move || lang.t("stats.users")}</h2>
                <div class="stat-grid">
                    <StatCard
                        icon="👥"
                        label=Signal::derive(move || lang.t("stats.total"))
                        value=figure(|s| s.users.total.to_string())
                    />
                    <StatCard
                        icon="🚕"
                        label=Signal::derive(move || lang.t("stats.drivers"))
                        value=figure(|s| s.users.drivers.to_string())
                    />
                    <StatCard
                        icon="🧍"
                        label=Signal::derive(move || lang.t("stats.clients"))
                        value=figure(|s| s.users.clients.to_string())
                    />
                    <StatCard
                        icon="🆕"
                        label=Signal::derive(move || lang.t("stats.today"))
                        value=figure(|s| s.users.new_today.to_string())
                    />
                </div>
            </section>

            <section>
                <h2>{move || lang.t("stats.orders")}</h2>
                <div class="stat-grid">
                    <StatCard
                        icon="📦"
                        label=Signal::derive(move || lang.t("stats.total"))
                        value=figure(|s| s.orders.total.to_string())
                    />
                    <StatCard
                        icon="📅"
                        label=Signal::derive(move || lang.t("stats.today"))
                        value=figure(|s| s.orders.today.to_string())
                    />
                    <StatCard
                        icon="🗓"
                        label=Signal::derive(move || lang.t("stats.week"))
                        value=figure(|s| s.orders.week.to_string())
                    />
                    <StatCard
                        icon="🚕"
                        label=Signal::derive(move || lang.t("category.taxi"))
                        value=figure(|s| s.orders.by_category.taxi.to_string())
                    />
                    <StatCard
                        icon="📦"
                        label=Signal::derive(move || lang.t("category.parcel"))
                        value=figure(|s| s.orders.by_category.parcel.to_string())
                    />
                    <StatCard
                        icon="🚚"
                        label=Signal::derive(move || lang.t("category.cargo"))
                        value=figure(|s| s.orders.by_category.cargo.to_string())
                    />
                </div>
            </section>

            <section>
                <h2>{move || lang.t("stats.payments")}</h2>
                <div class="stat-grid">
                    <StatCard
                        icon="💳"
                        label=Signal::derive(move || lang.t("stats.total"))
                        value=figure(|s| s.payments.total.to_string())
                    />
                    <StatCard
                        icon="⏳"
                        label=Signal::derive(move || lang.t("status.pending"))
                        value=figure(|s| s.payments.pending.to_string())
                    />
                    <StatCard
                        icon="✅"
                        label=Signal::derive(move || lang.t("status.approved"))
                        value=figure(|s| s.payments.approved.to_string())
                    />
                    <StatCard
                        icon="💰"
                        label=Signal::derive(move || lang.t("stats.balls_paid"))
                        value=figure(|s| s.payments.total_balls_paid.to_string())
                    />
                </div>
            </section>

            <section>
                <h2>{move || lang.t("stats.applications")}</h2>
                <div class="stat-grid">
                    <StatCard
                        icon="📋"
                        label=Signal::derive(move || lang.t("stats.total"))
                        value=figure(|s| s.applications.total.to_string())
                    />
                    <StatCard
                        icon="⏳"
                        label=Signal::derive(move || lang.t("status.pending"))
                        value=figure(|s| s.applications.pending.to_string())
                    />
                    <StatCard
                        icon="✅"
                        label=Signal::derive(move || lang.t("status.approved"))
                        value=figure(|s| s.applications.approved.to_string())
                    />
                    <StatCard
                        icon="🚫"
                        label=Signal::derive(move || lang.t("status.rejected"))
                        value=figure(|s| s.applications.rejected.to_string())
                    />
                </div>
            </section>

            <section>
                <h2>{move || lang.t("stats.tickets")}</h2>
                <div class="stat-grid">
                    <StatCard
                        icon="✈️"
                        label=Signal::derive(move || lang.t("orders.tab_flight"))
                        value=figure(|s| s.tickets.flight.total.to_string())
                    />
                    <StatCard
                        icon="🚆"
                        label=Signal::derive(move || lang.t("orders.tab_train"))
                        value=figure(|s| s.tickets.train.total.to_string())
                    />
                    <StatCard
                        icon="⭐"
                        label=Signal::derive(move || lang.t("ratings.average"))
                        value=figure(|s| format!("{:.1}", s.ratings.average))
                    />
                    <StatCard
                        icon="🔢"
                        label=Signal::derive(move || lang.t("ratings.count"))
                        value=figure(|s| s.ratings.total.to_string())
                    />
                </div>
            </section>
        </div>
    }
}
