//! Payments Page
//!
//! Ball top-up requests: status filter, debounced search over the driver,
//! screenshot link, and approve/reject moderation. The list item is
//! patched from the payment the confirm endpoint returns.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_timestamp;
use crate::api;
use crate::api::payments::PaymentAction;
use crate::components::{card_renderer, DataTable, StatusBadge, TableColumn};
use crate::context::{use_language, use_toasts, Language};
use crate::models::{BallPayment, PaymentStatus};
use crate::search::{search_filter, use_debounced, DEFAULT_DEBOUNCE_MS};
use crate::store::replace_by_id;

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "common.all"),
    ("pending", "status.pending"),
    ("approved", "status.approved"),
    ("rejected", "status.rejected"),
];

fn status_label(lang: Language, payment: &BallPayment) -> String {
    if payment.status_display.is_empty() {
        lang.t(&format!("status.{}", payment.status.as_str()))
    } else {
        payment.status_display.clone()
    }
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (payments, set_payments) = signal(Vec::<BallPayment>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::from("all"));

    Effect::new(move |_| {
        spawn_local(async move {
            match api::payments::list().await {
                Ok(loaded) => set_payments.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
            set_loading.set(false);
        });
    });

    let debounced = use_debounced(search.into(), DEFAULT_DEBOUNCE_MS);
    let searched = Memo::new(move |_| {
        search_filter(&payments.get(), &debounced.get(), |payment| {
            vec![payment.driver.full_name.clone(), payment.driver.phone.clone()]
        })
    });
    let filtered = Memo::new(move |_| {
        let status = status_filter.get();
        searched
            .get()
            .into_iter()
            .filter(|payment| status == "all" || payment.status.as_str() == status)
            .collect::<Vec<_>>()
    });

    let on_confirm = Callback::new(move |(id, action): (i64, PaymentAction)| {
        let reason = match action {
            PaymentAction::Reject => web_sys::window().and_then(|w| {
                w.prompt_with_message(&lang.t("payments.rejection_reason"))
                    .ok()
                    .flatten()
            }),
            PaymentAction::Approve => None,
        };
        spawn_local(async move {
            match api::payments::confirm(id, action, reason.as_deref()).await {
                Ok(updated) => {
                    set_payments.update(|items| replace_by_id(items, updated));
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let header = move |key: &'static str| Signal::derive(move || lang.t(key));

    let columns = vec![
        TableColumn::text("driver", header("payments.driver"), |p: &BallPayment| {
            p.driver.full_name.clone()
        }),
        TableColumn::text("phone", header("drivers.phone"), |p: &BallPayment| {
            p.driver.phone.clone()
        }),
        TableColumn::text("amount", header("payments.amount"), |p: &BallPayment| {
            format!("{} so'm", p.amount)
        }),
        TableColumn::new("screenshot", header("payments.screenshot"), |p: &BallPayment| {
            match p.screenshot_url.clone() {
                Some(href) => view! { <a href=href target="_blank">"🖼"</a> }.into_any(),
                None => ().into_any(),
            }
        }),
        TableColumn::new("status", header("common.status"), move |p: &BallPayment| {
            view! { <StatusBadge status=p.status.as_str() label=status_label(lang, p) /> }
                .into_any()
        }),
        TableColumn::new("created", header("common.date"), |p: &BallPayment| {
            format_timestamp(&p.created_at).into_any()
        }),
        TableColumn::new("actions", header("common.actions"), move |p: &BallPayment| {
            let id = p.id;
            let status = p.status;
            view! {
                <Show when=move || matches!(status, PaymentStatus::Pending)>
                    <div class="row-actions">
                        <button
                            class="action-btn approve"
                            title=move || lang.t("payments.approve")
                            on:click=move |_| on_confirm.run((id, PaymentAction::Approve))
                        >
                            "✓"
                        </button>
                        <button
                            class="action-btn reject"
                            title=move || lang.t("payments.reject")
                            on:click=move |_| on_confirm.run((id, PaymentAction::Reject))
                        >
                            "✗"
                        </button>
                    </div>
                </Show>
            }
            .into_any()
        }),
    ];

    let render_card = card_renderer(move |p: &BallPayment| {
        let id = p.id;
        let status = p.status;
        view! {
            <div class="card-row">
                <strong>{p.driver.full_name.clone()}</strong>
                <StatusBadge status=p.status.as_str() label=status_label(lang, p) />
            </div>
            <div class="card-row">{format!("{} so'm", p.amount)}</div>
            <Show when=move || matches!(status, PaymentStatus::Pending)>
                <div class="row-actions">
                    <button
                        class="action-btn approve"
                        on:click=move |_| on_confirm.run((id, PaymentAction::Approve))
                    >
                        {move || lang.t("payments.approve")}
                    </button>
                    <button
                        class="action-btn reject"
                        on:click=move |_| on_confirm.run((id, PaymentAction::Reject))
                    >
                        {move || lang.t("payments.reject")}
                    </button>
                </div>
            </Show>
        }
        .into_any()
    });

    view! {
        <div class="page payments-page">
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
                key=|p: &BallPayment| p.id
            />
        </div>
    }
}
