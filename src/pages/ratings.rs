//! Ratings Page
//!
//! Aggregated per-driver rating summaries plus the raw recent ratings,
//! fetched in parallel.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_timestamp;
use crate::api;
use crate::components::{card_renderer, DataTable, TableColumn};
use crate::context::{use_language, use_toasts};
use crate::models::{DriverRatingSummary, Rating};
use crate::search::{search_filter, use_debounced, DEFAULT_DEBOUNCE_MS};

#[component]
pub fn RatingsPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (summaries, set_summaries) = signal(Vec::<DriverRatingSummary>::new());
    let (ratings, set_ratings) = signal(Vec::<Rating>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let (summaries_result, ratings_result) =
                join!(api::ratings::driver_summaries(), api::ratings::list());
            match summaries_result {
                Ok(loaded) => set_summaries.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
            if let Ok(loaded) = ratings_result {
                set_ratings.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let debounced = use_debounced(search.into(), DEFAULT_DEBOUNCE_MS);
    let filtered_summaries = Memo::new(move |_| {
        search_filter(&summaries.get(), &debounced.get(), |summary| {
            vec![
                summary.driver_name.clone(),
                summary.driver_phone.clone(),
                summary.driver_username.clone(),
            ]
        })
    });

    let header = move |key: &'static str| Signal::derive(move || lang.t(key));

    let summary_columns = vec![
        TableColumn::text("driver", header("ratings.driver"), |s: &DriverRatingSummary| {
            s.driver_name.clone()
        }),
        TableColumn::text("phone", header("drivers.phone"), |s: &DriverRatingSummary| {
            s.driver_phone.clone()
        }),
        TableColumn::text("average", header("ratings.average"), |s: &DriverRatingSummary| {
            format!("★ {:.1}", s.avg_rating)
        }),
        TableColumn::text("count", header("ratings.count"), |s: &DriverRatingSummary| {
            s.total_ratings.to_string()
        }),
        TableColumn::text("orders", header("stats.orders"), |s: &DriverRatingSummary| {
            s.total_orders.to_string()
        }),
        TableColumn::text("balls", header("drivers.balance"), |s: &DriverRatingSummary| {
            s.balls.to_string()
        }),
    ];

    let summary_card = card_renderer(|s: &DriverRatingSummary| {
        view! {
            <div class="card-row">
                <strong>{s.driver_name.clone()}</strong>
                <span>{format!("★ {:.1} ({})", s.avg_rating, s.total_ratings)}</span>
            </div>
            <div class="card-row muted">{s.driver_phone.clone()}</div>
        }
        .into_any()
    });

    let rating_columns = vec![
        TableColumn::text("client", header("ratings.client"), |r: &Rating| {
            r.client.full_name.clone()
        }),
        TableColumn::text("driver", header("ratings.driver"), |r: &Rating| {
            r.driver.full_name.clone()
        }),
        TableColumn::text("score", header("ratings.score"), |r: &Rating| {
            format!("★ {}", r.score)
        }),
        TableColumn::text("comment", header("ratings.comment"), |r: &Rating| r.comment.clone()),
        TableColumn::new("created", header("common.date"), |r: &Rating| {
            format_timestamp(&r.created_at).into_any()
        }),
    ];

    let rating_card = card_renderer(|r: &Rating| {
        view! {
            <div class="card-row">
                <strong>{r.driver.full_name.clone()}</strong>
                <span>{format!("★ {}", r.score)}</span>
            </div>
            <div class="card-row muted">{r.comment.clone()}</div>
        }
        .into_any()
    });

    view! {
        <div class="page ratings-page">
            <div class="list-controls">
                <input
                    class="search-input"
                    type="text"
                    placeholder=move || lang.t("common.search")
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">{move || lang.t("common.loading")}</div>
            </Show>

            <section>
                <h2>{move || lang.t("ratings.summary")}</h2>
                <DataTable
                    items=Signal::derive(move || filtered_summaries.get())
                    columns=summary_columns
                    render_card=summary_card
                    key=|s: &DriverRatingSummary| s.driver_id
                />
            </section>

            <section>
                <h2>{move || lang.t("nav.ratings")}</h2>
                <DataTable
                    items=Signal::derive(move || ratings.get())
                    columns=rating_columns
                    render_card=rating_card
                    key=|r: &Rating| r.id
                />
            </section>
        </div>
    }
}
