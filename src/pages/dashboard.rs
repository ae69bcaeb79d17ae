//! Dashboard Page
//!
//! Overview figures plus a short recent-activity feed built from the
//! general statistics payload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_timestamp;
use crate::api;
use crate::components::StatCard;
use crate::context::{use_language, use_toasts};
use crate::models::{PaymentStatus, Statistics};

/// One line of the recent-activity feed
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub label_key: &'static str,
    pub detail: String,
    pub time: String,
    pub tone: &'static str,
}

/// Top 3 recent orders and top 2 recent payments, merged, capped at 5.
/// Payment ids are offset so the two sources cannot collide as keys.
pub fn activity_feed(stats: &Statistics) -> Vec<Activity> {
    let mut feed = Vec::new();
    for order in stats.recent_orders.iter().take(3) {
        feed.push(Activity {
            id: order.id,
            label_key: "stats.new_order",
            detail: format!(
                "{} - {} → {}",
                order.category_display, order.from_location, order.to_location
            ),
            time: order.created_at.clone(),
            tone: "info",
        });
    }
    for payment in stats.recent_payments.iter().take(2) {
        feed.push(Activity {
            id: payment.id + 1_000,
            label_key: "stats.payment_request",
            detail: format!("{} - {} so'm", payment.driver.full_name, payment.amount),
            time: payment.created_at.clone(),
            tone: match payment.status {
                PaymentStatus::Approved => "success",
                PaymentStatus::Rejected => "danger",
                PaymentStatus::Pending => "warning",
            },
        });
    }
    feed.truncate(5);
    feed
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (stats, set_stats) = signal(None::<Statistics>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::stats::general().await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(error) => toasts.api_error(lang, &error),
            }
            set_loading.set(false);
        });
    });

    let figure = move |pick: fn(&Statistics) -> String| {
        Signal::derive(move || stats.get().as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div class="page dashboard-page">
            <Show when=move || loading.get()>
                <div class="loading">{move || lang.t("common.loading")}</div>
            </Show>

            <div class="stat-grid">
                <StatCard
                    icon="👥"
                    label=Signal::derive(move || lang.t("stats.users"))
                    value=figure(|s| s.total_users.to_string())
                />
                <StatCard
                    icon="🚕"
                    label=Signal::derive(move || lang.t("stats.drivers"))
                    value=figure(|s| s.total_drivers.to_string())
                />
                <StatCard
                    icon="📦"
                    label=Signal::derive(move || lang.t("stats.orders"))
                    value=figure(|s| s.total_orders.to_string())
                />
                <StatCard
                    icon="💳"
                    label=Signal::derive(move || lang.t("stats.payments"))
                    value=figure(|s| s.total_payments.to_string())
                />
                <StatCard
                    icon="📋"
                    label=Signal::derive(move || lang.t("stats.pending_applications"))
                    value=figure(|s| s.pending_applications.to_string())
                />
                <StatCard
                    icon="⏳"
                    label=Signal::derive(move || lang.t("stats.pending_payments"))
                    value=figure(|s| s.pending_payments.to_string())
                />
                <StatCard
                    icon="💰"
                    label=Signal::derive(move || lang.t("stats.revenue"))
                    value=figure(|s| format!("{} so'm", s.total_revenue))
                />
            </div>

            <div class="stat-grid">
                <StatCard
                    icon="🚕"
                    label=Signal::derive(move || lang.t("category.taxi"))
                    value=figure(|s| s.orders_by_category.taxi.to_string())
                />
                <StatCard
                    icon="📦"
                    label=Signal::derive(move || lang.t("category.parcel"))
                    value=figure(|s| s.orders_by_category.parcel.to_string())
                />
                <StatCard
                    icon="🚚"
                    label=Signal::derive(move || lang.t("category.cargo"))
                    value=figure(|s| s.orders_by_category.cargo.to_string())
                />
            </div>

            <section class="activity-feed">
                <h2>{move || lang.t("stats.recent_activity")}</h2>
                <For
                    each=move || stats.get().as_ref().map(activity_feed).unwrap_or_default()
                    key=|activity| activity.id
                    children=move |activity| {
                        let label_key = activity.label_key;
                        view! {
                            <div class=format!("activity-item activity-{}", activity.tone)>
                                <span class="activity-text">
                                    {move || lang.t(label_key)} ": " {activity.detail.clone()}
                                </span>
                                <span class="activity-time">{format_timestamp(&activity.time)}</span>
                            </div>
                        }
                    }
                />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BallPayment, Order, OrderCategory, OrderStatus, PaymentStatus, User,
    };

    fn make_user(id: i64, name: &str) -> User {
        User {
            id,
            username: format!("user{}", id),
            full_name: name.to_string(),
            phone: String::new(),
            role: String::new(),
            balls: 0,
            language: String::new(),
            status: String::new(),
            address: String::new(),
            travel_route: String::new(),
            date_joined: String::new(),
        }
    }

    fn make_order(id: i64) -> Order {
        Order {
            id,
            client: make_user(id, "Mijoz"),
            category: OrderCategory::Taxi,
            category_display: "Taxi".to_string(),
            from_location: "Toshkent".to_string(),
            to_location: "Samarqand".to_string(),
            date: String::new(),
            description: String::new(),
            accepted_driver: None,
            status: OrderStatus::Pending,
            status_display: String::new(),
            passengers: None,
            parcel_content: String::new(),
            parcel_weight: String::new(),
            parcel_size: String::new(),
            cargo_type: String::new(),
            cargo_weight: String::new(),
            cargo_vehicle_type: String::new(),
            created_at: String::new(),
        }
    }

    fn make_payment(id: i64, status: PaymentStatus) -> BallPayment {
        BallPayment {
            id,
            driver: make_user(id, "Haydovchi"),
            amount: 50_000,
            screenshot: String::new(),
            screenshot_url: None,
            status,
            status_display: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_activity_feed_caps_at_five() {
        let stats = Statistics {
            recent_orders: (1..=10).map(make_order).collect(),
            recent_payments: (1..=5).map(|id| make_payment(id, PaymentStatus::Pending)).collect(),
            ..Statistics::default()
        };
        let feed = activity_feed(&stats);
        assert_eq!(feed.len(), 5);
        // 3 orders then 2 payments
        assert_eq!(feed[0].label_key, "stats.new_order");
        assert_eq!(feed[2].label_key, "stats.new_order");
        assert_eq!(feed[3].label_key, "stats.payment_request");
    }

    #[test]
    fn test_activity_feed_payment_ids_do_not_collide_with_orders() {
        let stats = Statistics {
            recent_orders: vec![make_order(1)],
            recent_payments: vec![make_payment(1, PaymentStatus::Approved)],
            ..Statistics::default()
        };
        let feed = activity_feed(&stats);
        assert_eq!(feed.len(), 2);
        assert_ne!(feed[0].id, feed[1].id);
    }

    #[test]
    fn test_activity_feed_payment_tone_follows_status() {
        let stats = Statistics {
            recent_payments: vec![
                make_payment(1, PaymentStatus::Approved),
                make_payment(2, PaymentStatus::Rejected),
            ],
            ..Statistics::default()
        };
        let feed = activity_feed(&stats);
        assert_eq!(feed[0].tone, "success");
        assert_eq!(feed[1].tone, "danger");
    }
}
