//! Orders Page
//!
//! Orders plus flight/train ticket requests behind tabs. All three
//! collections are fetched in parallel before the first render; search and
//! the exact-match filters compose client-side.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_timestamp;
use crate::api;
use crate::components::{card_renderer, DataTable, StatusBadge, TableColumn};
use crate::context::{use_language, use_toasts, Language};
use crate::models::{Order, OrderStatus, Ticket};
use crate::search::{search_filter, use_debounced, DEFAULT_DEBOUNCE_MS};
use crate::store::replace_by_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Orders,
    Flight,
    Train,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Orders, "orders.tab_orders"),
    (Tab::Flight, "orders.tab_flight"),
    (Tab::Train, "orders.tab_train"),
];

const CATEGORY_FILTERS: &[(&str, &str)] = &[
    ("all", "common.all"),
    ("taxi", "category.taxi"),
    ("parcel", "category.parcel"),
    ("cargo", "category.cargo"),
];

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "common.all"),
    ("pending", "status.pending"),
    ("accepted", "status.accepted"),
    ("cancelled", "status.cancelled"),
];

fn order_status_label(lang: Language, order: &Order) -> String {
    if order.status_display.is_empty() {
        lang.t(&format!("status.{}", order.status.as_str()))
    } else {
        order.status_display.clone()
    }
}

fn category_label(lang: Language, order: &Order) -> String {
    if order.category_display.is_empty() {
        lang.t(&format!("category.{}", order.category.as_str()))
    } else {
        order.category_display.clone()
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (tab, set_tab) = signal(Tab::Orders);
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (flight_tickets, set_flight_tickets) = signal(Vec::<Ticket>::new());
    let (train_tickets, set_train_tickets) = signal(Vec::<Ticket>::new());
    let (loading, set_loading) = signal(true);

    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal(String::from("all"));
    let (status_filter, set_status_filter) = signal(String::from("all"));

    Effect::new(move |_| {
        spawn_local(async move {
            let (orders_result, flight_result, train_result) = join!(
                api::orders::list(),
                api::tickets::list_flight(),
                api::tickets::list_train(),
            );
            match orders_result {
                Ok(loaded) => set_orders.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
            if let Ok(loaded) = flight_result {
                set_flight_tickets.set(loaded);
            }
            if let Ok(loaded) = train_result {
                set_train_tickets.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let debounced = use_debounced(search.into(), DEFAULT_DEBOUNCE_MS);

    let searched_orders = Memo::new(move |_| {
        search_filter(&orders.get(), &debounced.get(), |order| {
            vec![
                order.client.full_name.clone(),
                order.client.phone.clone(),
                order.from_location.clone(),
                order.to_location.clone(),
            ]
        })
    });
    let filtered_orders = Memo::new(move |_| {
        let category = category_filter.get();
        let status = status_filter.get();
        searched_orders
            .get()
            .into_iter()
            .filter(|order| category == "all" || order.category.as_str() == category)
            .filter(|order| status == "all" || order.status.as_str() == status)
            .collect::<Vec<_>>()
    });

    let filtered_tickets = Memo::new(move |_| {
        let pool = match tab.get() {
            Tab::Flight => flight_tickets.get(),
            Tab::Train => train_tickets.get(),
            Tab::Orders => Vec::new(),
        };
        search_filter(&pool, &debounced.get(), |ticket| {
            vec![
                ticket.full_name.clone(),
                ticket.phone.clone(),
                ticket.from_location.clone(),
                ticket.to_location.clone(),
            ]
        })
    });

    let on_accept = Callback::new(move |id: i64| {
        let raw = web_sys::window()
            .and_then(|w| w.prompt_with_message(&lang.t("orders.driver_id")).ok().flatten());
        let Some(driver_id) = raw.and_then(|value| value.trim().parse::<i64>().ok()) else {
            return;
        };
        spawn_local(async move {
            match api::orders::accept(id, driver_id).await {
                Ok(updated) => {
                    set_orders.update(|items| replace_by_id(items, updated));
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let header = move |key: &'static str| Signal::derive(move || lang.t(key));

    let order_columns = vec![
        TableColumn::text("client", header("orders.client"), |o: &Order| {
            o.client.full_name.clone()
        }),
        TableColumn::text("route", header("orders.route"), |o: &Order| {
            format!("{} → {}", o.from_location, o.to_location)
        }),
        TableColumn::text("category", header("orders.category"), move |o: &Order| {
            category_label(lang, o)
        }),
        TableColumn::new("status", header("common.status"), move |o: &Order| {
            view! { <StatusBadge status=o.status.as_str() label=order_status_label(lang, o) /> }
                .into_any()
        }),
        TableColumn::text("driver", header("orders.driver"), |o: &Order| {
            o.accepted_driver
                .as_ref()
                .map(|driver| driver.full_name.clone())
                .unwrap_or_default()
        }),
        TableColumn::new("created", header("common.date"), |o: &Order| {
            format_timestamp(&o.created_at).into_any()
        }),
        TableColumn::new("actions", header("common.actions"), move |o: &Order| {
            let id = o.id;
            let status = o.status;
            view! {
                <Show when=move || matches!(status, OrderStatus::Pending)>
                    <button class="action-btn approve" on:click=move |_| on_accept.run(id)>
                        {move || lang.t("orders.accept")}
                    </button>
                </Show>
            }
            .into_any()
        }),
    ];

    let order_card = card_renderer(move |o: &Order| {
        view! {
            <div class="card-row">
                <strong>{o.client.full_name.clone()}</strong>
                <StatusBadge status=o.status.as_str() label=order_status_label(lang, o) />
            </div>
            <div class="card-row">{format!("{} → {}", o.from_location, o.to_location)}</div>
            <div class="card-row muted">{category_label(lang, o)}</div>
        }
        .into_any()
    });

    let ticket_columns = vec![
        TableColumn::text("passenger", header("tickets.passenger"), |t: &Ticket| {
            t.full_name.clone()
        }),
        TableColumn::text("phone", header("drivers.phone"), |t: &Ticket| t.phone.clone()),
        TableColumn::text("route", header("orders.route"), |t: &Ticket| {
            format!("{} → {}", t.from_location, t.to_location)
        }),
        TableColumn::text("travel_date", header("tickets.travel_date"), |t: &Ticket| {
            t.travel_date.clone()
        }),
        TableColumn::new("status", header("common.status"), |t: &Ticket| {
            let label = if t.status_display.is_empty() {
                t.status.clone()
            } else {
                t.status_display.clone()
            };
            view! { <StatusBadge status=t.status.clone() label=label /> }.into_any()
        }),
    ];

    let ticket_card = card_renderer(|t: &Ticket| {
        view! {
            <div class="card-row"><strong>{t.full_name.clone()}</strong></div>
            <div class="card-row">{format!("{} → {}", t.from_location, t.to_location)}</div>
            <div class="card-row muted">{t.travel_date.clone()}</div>
        }
        .into_any()
    });

    view! {
        <div class="page orders-page">
            <div class="tab-bar">
                {TABS
                    .iter()
                    .map(|&(value, key)| {
                        let class = move || if tab.get() == value { "tab active" } else { "tab" };
                        view! {
                            <button class=class on:click=move |_| set_tab.set(value)>
                                {move || lang.t(key)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="list-controls">
                <input
                    class="search-input"
                    type="text"
                    placeholder=move || lang.t("common.search")
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <Show when=move || tab.get() == Tab::Orders>
                    <select
                        prop:value=move || category_filter.get()
                        on:change=move |ev| set_category_filter.set(event_target_value(&ev))
                    >
                        {CATEGORY_FILTERS
                            .iter()
                            .map(|&(value, key)| {
                                view! { <option value=value>{move || lang.t(key)}</option> }
                            })
                            .collect_view()}
                    </select>
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
                </Show>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">{move || lang.t("common.loading")}</div>
            </Show>

            <Show when=move || tab.get() == Tab::Orders>
                <DataTable
                    items=Signal::derive(move || filtered_orders.get())
                    columns=order_columns.clone()
                    render_card=order_card.clone()
                    key=|o: &Order| o.id
                />
            </Show>
            <Show when=move || tab.get() != Tab::Orders>
                <DataTable
                    items=Signal::derive(move || filtered_tickets.get())
                    columns=ticket_columns.clone()
                    render_card=ticket_card.clone()
                    key=|t: &Ticket| t.id
                />
            </Show>
        </div>
    }
}
