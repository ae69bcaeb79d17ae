//! Ball Packages Section
//!
//! CRUD over the ball pricing tiers offered to drivers. One form serves
//! both create and edit; the list is patched in place from the response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::settings::BallPackageForm;
use crate::components::DeleteConfirmButton;
use crate::context::{use_language, use_toasts};
use crate::models::{BallPackage, ServiceType};
use crate::store::{remove_by_id, replace_by_id};

fn service_type_from(value: &str) -> ServiceType {
    match value {
        "cargo" => ServiceType::Cargo,
        _ => ServiceType::TaxiParcel,
    }
}

fn service_type_value(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::TaxiParcel => "taxi_parcel",
        ServiceType::Cargo => "cargo",
    }
}

#[component]
pub fn BallPackagesSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (packages, set_packages) = signal(Vec::<BallPackage>::new());
    let (editing, set_editing) = signal(None::<i64>);

    let (name, set_name) = signal(String::new());
    let (service_type, set_service_type) = signal(String::from("taxi_parcel"));
    let (ball_count, set_ball_count) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (discount, set_discount) = signal(String::from("0"));
    let (is_active, set_is_active) = signal(true);
    let (is_popular, set_is_popular) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::settings::list_ball_packages().await {
                Ok(loaded) => set_packages.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let reset_form = move || {
        set_editing.set(None);
        set_name.set(String::new());
        set_service_type.set(String::from("taxi_parcel"));
        set_ball_count.set(String::new());
        set_price.set(String::new());
        set_discount.set(String::from("0"));
        set_is_active.set(true);
        set_is_popular.set(false);
    };

    let start_edit = move |package: BallPackage| {
        set_editing.set(Some(package.id));
        set_name.set(package.package_name);
        set_service_type.set(service_type_value(package.service_type).to_string());
        set_ball_count.set(package.ball_count.to_string());
        set_price.set(package.price.to_string());
        set_discount.set(package.discount_percentage.to_string());
        set_is_active.set(package.is_active);
        set_is_popular.set(package.is_popular);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let package_name = name.get();
        let balls = ball_count.get().parse::<u32>();
        let price_value = price.get().parse::<f64>();
        let (Ok(balls), Ok(price_value)) = (balls, price_value) else {
            toasts.error(lang.t("error.required"));
            return;
        };
        if package_name.trim().is_empty() {
            toasts.error(lang.t("error.required"));
            return;
        }
        let form = BallPackageForm {
            package_name,
            service_type: service_type_from(&service_type.get()),
            ball_count: balls,
            price: price_value,
            discount_percentage: discount.get().parse().unwrap_or(0.0),
            is_active: is_active.get(),
            is_popular: is_popular.get(),
            description: None,
        };
        let edit_id = editing.get();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::settings::update_ball_package(id, &form).await,
                None => api::settings::create_ball_package(&form).await,
            };
            match result {
                Ok(saved) => {
                    set_packages.update(|items| {
                        if edit_id.is_some() {
                            replace_by_id(items, saved);
                        } else {
                            items.push(saved);
                        }
                    });
                    reset_form();
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::settings::delete_ball_package(id).await {
                Ok(_) => {
                    set_packages.update(|items| remove_by_id(items, id));
                    toasts.success(lang.t("common.deleted"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.packages")}</h2>

            <form class="settings-form inline-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder=move || lang.t("settings.package_name")
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || service_type.get()
                    on:change=move |ev| set_service_type.set(event_target_value(&ev))
                >
                    <option value="taxi_parcel">{move || lang.t("service.taxi_parcel")}</option>
                    <option value="cargo">{move || lang.t("service.cargo")}</option>
                </select>
                <input
                    type="number"
                    placeholder=move || lang.t("settings.ball_count")
                    prop:value=move || ball_count.get()
                    on:input=move |ev| set_ball_count.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder=move || lang.t("settings.price")
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder=move || lang.t("settings.discount")
                    prop:value=move || discount.get()
                    on:input=move |ev| set_discount.set(event_target_value(&ev))
                />
                <label class="field-inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |_| set_is_active.update(|v| *v = !*v)
                    />
                    <span>{move || lang.t("status.active")}</span>
                </label>
                <label class="field-inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_popular.get()
                        on:change=move |_| set_is_popular.update(|v| *v = !*v)
                    />
                    <span>{move || lang.t("settings.popular")}</span>
                </label>
                <button type="submit">
                    {move || {
                        if editing.get().is_some() {
                            lang.t("common.save")
                        } else {
                            lang.t("common.add")
                        }
                    }}
                </button>
                {move || {
                    editing.get().map(|_| {
                        view! {
                            <button type="button" class="secondary" on:click=move |_| reset_form()>
                                {move || lang.t("common.cancel")}
                            </button>
                        }
                    })
                }}
            </form>

            <ul class="settings-list">
                <For
                    each=move || packages.get()
                    key=|package| package.id
                    children=move |package| {
                        let id = package.id;
                        let edit_package = package.clone();
                        view! {
                            <li class="settings-list-item">
                                <span class="item-title">
                                    {package.package_name.clone()}
                                    {if package.is_popular { " ★" } else { "" }}
                                </span>
                                <span class="item-meta">
                                    {format!(
                                        "{} · {} ball · {} so'm",
                                        service_type_value(package.service_type),
                                        package.ball_count,
                                        package.price,
                                    )}
                                </span>
                                <button class="edit-btn" on:click=move |_| start_edit(edit_package.clone())>
                                    "✎"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |()| on_delete(id))
                                />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
