//! Drivers Page
//!
//! Driver applications: debounced search over name/phone/car fields, a
//! status filter, moderation actions, and a detail view with rating
//! aggregates and ball top-ups. The list is patched in place from the
//! application the approve endpoint returns.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_timestamp;
use crate::api;
use crate::api::drivers::DriverAction;
use crate::components::{card_renderer, DataTable, StatusBadge, TableColumn};
use crate::context::{use_language, use_toasts, Language};
use crate::models::{
    ApplicationStatus, Direction, DriverApplication, DriverDetail, DriverStatistics,
};
use crate::search::{search_filter, use_debounced, DEFAULT_DEBOUNCE_MS};
use crate::store::replace_by_id;

const BAN_REASON: &str = "Admin tomonidan ban qilindi";

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "common.all"),
    ("pending", "status.pending"),
    ("assigned", "status.assigned"),
    ("approved", "status.approved"),
    ("rejected", "status.rejected"),
];

fn status_label(lang: Language, driver: &DriverApplication) -> String {
    if driver.status_display.is_empty() {
        lang.t(&format!("status.{}", driver.status.as_str()))
    } else {
        driver.status_display.clone()
    }
}

fn direction_label(lang: Language, driver: &DriverApplication) -> String {
    if driver.direction_display.is_empty() {
        match driver.direction {
            Direction::Taxi => lang.t("direction.taxi"),
            Direction::Cargo => lang.t("direction.cargo"),
        }
    } else {
        driver.direction_display.clone()
    }
}

#[component]
pub fn DriversPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (drivers, set_drivers) = signal(Vec::<DriverApplication>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::from("all"));

    let (detail, set_detail) = signal(None::<DriverDetail>);
    let (detail_stats, set_detail_stats) = signal(None::<DriverStatistics>);
    let (ball_amount, set_ball_amount) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::drivers::list().await {
                Ok(loaded) => set_drivers.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
            set_loading.set(false);
        });
    });

    let debounced = use_debounced(search.into(), DEFAULT_DEBOUNCE_MS);
    let searched = Memo::new(move |_| {
        search_filter(&drivers.get(), &debounced.get(), |driver| {
            vec![
                driver.full_name.clone(),
                driver.phone.clone(),
                driver.car_model.clone(),
                driver.car_number.clone(),
            ]
        })
    });
    let filtered = Memo::new(move |_| {
        let status = status_filter.get();
        searched
            .get()
            .into_iter()
            .filter(|driver| status == "all" || driver.status.as_str() == status)
            .collect::<Vec<_>>()
    });

    let on_moderate = Callback::new(
        move |(id, action, reason): (i64, DriverAction, Option<String>)| {
            spawn_local(async move {
                match api::drivers::moderate(id, action, reason.as_deref()).await {
                    Ok(updated) => {
                        set_drivers.update(|items| replace_by_id(items, updated));
                        toasts.success(lang.t("common.saved"));
                    }
                    Err(error) => toasts.api_error(lang, &error),
                }
            });
        },
    );

    let on_details = Callback::new(move |user_id: i64| {
        spawn_local(async move {
            let (detail_result, stats_result) =
                join!(api::drivers::detail(user_id), api::stats::driver(user_id));
            match detail_result {
                Ok(loaded) => {
                    // per-driver statistics are display-only extras
                    set_detail_stats.set(stats_result.ok());
                    set_detail.set(Some(loaded));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let on_add_balls = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = detail.get().map(|d| d.application.user.id) else {
            return;
        };
        let Ok(amount) = ball_amount.get().parse::<i64>() else {
            toasts.error(lang.t("error.required"));
            return;
        };
        if amount <= 0 {
            toasts.error(lang.t("error.required"));
            return;
        }
        spawn_local(async move {
            match api::drivers::add_balls(user_id, amount).await {
                Ok(response) => {
                    let balance = response.new_balance;
                    set_detail.update(|maybe| {
                        if let Some(loaded) = maybe {
                            loaded.application.user.balls = balance;
                        }
                    });
                    set_drivers.update(|items| {
                        if let Some(item) = items.iter_mut().find(|a| a.user.id == user_id) {
                            item.user.balls = balance;
                        }
                    });
                    set_ball_amount.set(String::new());
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    let header = move |key: &'static str| Signal::derive(move || lang.t(key));

    let columns = vec![
        TableColumn::text("name", header("drivers.name"), |d: &DriverApplication| {
            d.full_name.clone()
        }),
        TableColumn::text("phone", header("drivers.phone"), |d: &DriverApplication| {
            d.phone.clone()
        }),
        TableColumn::text("car", header("drivers.car"), |d: &DriverApplication| {
            format!("{} {}", d.car_model, d.car_number)
        }),
        TableColumn::text("direction", header("drivers.direction"), move |d: &DriverApplication| {
            direction_label(lang, d)
        }),
        TableColumn::new("status", header("common.status"), move |d: &DriverApplication| {
            view! {
                <StatusBadge status=d.status.as_str() label=status_label(lang, d) />
            }
            .into_any()
        }),
        TableColumn::new("created", header("common.date"), |d: &DriverApplication| {
            format_timestamp(&d.created_at).into_any()
        }),
        TableColumn::new("actions", header("common.actions"), move |d: &DriverApplication| {
            let id = d.id;
            let user_id = d.user.id;
            let status = d.status;
            view! {
                <div class="row-actions">
                    <button class="action-btn" on:click=move |_| on_details.run(user_id)>
                        "👁"
                    </button>
                    <Show when=move || {
                        matches!(status, ApplicationStatus::Pending | ApplicationStatus::Assigned)
                    }>
                        <button
                            class="action-btn approve"
                            title=move || lang.t("drivers.approve")
                            on:click=move |_| on_moderate.run((id, DriverAction::Approve, None))
                        >
                            "✓"
                        </button>
                        <button
                            class="action-btn reject"
                            title=move || lang.t("drivers.reject")
                            on:click=move |_| {
                                let reason = web_sys::window()
                                    .and_then(|w| {
                                        w.prompt_with_message(&lang.t("payments.rejection_reason"))
                                            .ok()
                                            .flatten()
                                    });
                                on_moderate.run((id, DriverAction::Reject, reason));
                            }
                        >
                            "✗"
                        </button>
                    </Show>
                    <Show when=move || matches!(status, ApplicationStatus::Approved)>
                        <button
                            class="action-btn ban"
                            title=move || lang.t("drivers.ban")
                            on:click=move |_| {
                                on_moderate
                                    .run((id, DriverAction::Reject, Some(BAN_REASON.to_string())));
                            }
                        >
                            "🚫"
                        </button>
                    </Show>
                </div>
            }
            .into_any()
        }),
    ];

    let render_card = card_renderer(move |d: &DriverApplication| {
        let user_id = d.user.id;
        view! {
            <div class="card-row">
                <strong>{d.full_name.clone()}</strong>
                <StatusBadge status=d.status.as_str() label=status_label(lang, d) />
            </div>
            <div class="card-row">{d.phone.clone()}</div>
            <div class="card-row muted">{format!("{} {}", d.car_model, d.car_number)}</div>
            <button class="action-btn" on:click=move |_| on_details.run(user_id)>
                {move || lang.t("drivers.details")}
            </button>
        }
        .into_any()
    });

    view! {
        <div class="page drivers-page">
            <div class="list-controls">
                <input
                    class="search-input"
                    type="text"
                    placeholder=move || lang.t("common.search")
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    {STATUS_FILTERS
                        .iter()
                        .map(|&(value, key)| {
                            view! { <option value=value>{move || lang.t(key)}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">{move || lang.t("common.loading")}</div>
            </Show>

            <DataTable
                items=Signal::derive(move || filtered.get())
                columns=columns
                render_card=render_card
                key=|d: &DriverApplication| d.id
            />

            // Detail view with rating aggregates and ball top-up
            {move || {
                detail
                    .get()
                    .map(|loaded| {
                        let app = loaded.application.clone();
                        let documents = [
                            ("drivers.passport", app.passport_image_url.clone()),
                            ("drivers.license", app.license_image_url.clone()),
                            ("drivers.sts", app.sts_image_url.clone()),
                            ("drivers.car_photo", app.car_photo_url.clone()),
                        ];
                        view! {
                            <div class="modal-overlay" on:click=move |_| set_detail.set(None)>
                                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{app.full_name.clone()}</h2>
                                    <p>{app.phone.clone()}</p>
                                    <p class="muted">
                                        {format!("{} {} ({})", app.car_model, app.car_number,
                                            app.car_year.map(|y| y.to_string()).unwrap_or_default())}
                                    </p>
                                    <p>
                                        {move || lang.t("drivers.balance")} ": "
                                        {app.user.balls.to_string()}
                                    </p>

                                    {match (loaded.rating, loaded.total_ratings) {
                                        (Some(rating), Some(total)) => {
                                            view! {
                                                <p>
                                                    {move || lang.t("drivers.rating")} ": "
                                                    {format!("★ {rating:.1} ({total})")}
                                                </p>
                                            }
                                                .into_any()
                                        }
                                        _ => {
                                            view! {
                                                <p class="muted">{move || lang.t("drivers.no_rating")}</p>
                                            }
                                                .into_any()
                                        }
                                    }}

                                    {move || {
                                        detail_stats
                                            .get()
                                            .map(|stats| {
                                                view! {
                                                    <p class="muted">
                                                        {format!(
                                                            "{}: {} / {} · {} so'm",
                                                            lang.t("stats.orders"),
                                                            stats.completed_orders,
                                                            stats.total_orders,
                                                            stats.total_earnings,
                                                        )}
                                                    </p>
                                                }
                                            })
                                    }}

                                    <div class="document-links">
                                        <span>{move || lang.t("drivers.documents")}</span>
                                        {documents
                                            .into_iter()
                                            .filter_map(|(key, url)| {
                                                url.map(|href| {
                                                    view! {
                                                        <a href=href target="_blank">
                                                            {move || lang.t(key)}
                                                        </a>
                                                    }
                                                })
                                            })
                                            .collect_view()}
                                    </div>

                                    <form class="inline-form" on:submit=on_add_balls>
                                        <input
                                            type="number"
                                            placeholder=move || lang.t("drivers.ball_amount")
                                            prop:value=move || ball_amount.get()
                                            on:input=move |ev| set_ball_amount.set(event_target_value(&ev))
                                        />
                                        <button type="submit">{move || lang.t("drivers.add_balls")}</button>
                                    </form>

                                    <button class="secondary" on:click=move |_| set_detail.set(None)>
                                        {move || lang.t("common.close")}
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
