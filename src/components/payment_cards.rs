//! Payment Cards Section
//!
//! CRUD over the cards drivers transfer ball payments to.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::payments::PaymentCardForm;
use crate::components::DeleteConfirmButton;
use crate::context::{use_language, use_toasts};
use crate::models::PaymentCard;
use crate::store::{remove_by_id, replace_by_id};

#[component]
pub fn PaymentCardsSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (cards, set_cards) = signal(Vec::<PaymentCard>::new());
    let (editing, set_editing) = signal(None::<i64>);

    let (card_number, set_card_number) = signal(String::new());
    let (cardholder, set_cardholder) = signal(String::new());
    let (bank, set_bank) = signal(String::new());
    let (is_active, set_is_active) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::payments::list_cards().await {
                Ok(loaded) => set_cards.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    let reset_form = move || {
        set_editing.set(None);
        set_card_number.set(String::new());
        set_cardholder.set(String::new());
        set_bank.set(String::new());
        set_is_active.set(true);
    };

    let start_edit = move |card: PaymentCard| {
        set_editing.set(Some(card.id));
        set_card_number.set(card.card_number);
        set_cardholder.set(card.cardholder_name);
        set_bank.set(card.bank_name);
        set_is_active.set(card.is_active);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let number = card_number.get();
        let holder = cardholder.get();
        if number.trim().is_empty() || holder.trim().is_empty() {
            toasts.error(lang.t("error.required"));
            return;
        }
        let form = PaymentCardForm {
            card_number: number,
            cardholder_name: holder,
            bank_name: bank.get(),
            is_active: is_active.get(),
        };
        let edit_id = editing.get();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::payments::update_card(id, &form).await,
                None => api::payments::create_card(&form).await,
            };
            match result {
                Ok(saved) => {
                    set_cards.update(|items| {
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
            match api::payments::delete_card(id).await {
                Ok(_) => {
                    set_cards.update(|items| remove_by_id(items, id));
                    toasts.success(lang.t("common.deleted"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.cards")}</h2>

            <form class="settings-form inline-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder=move || lang.t("settings.card_number")
                    prop:value=move || card_number.get()
                    on:input=move |ev| set_card_number.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder=move || lang.t("settings.cardholder")
                    prop:value=move || cardholder.get()
                    on:input=move |ev| set_cardholder.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder=move || lang.t("settings.bank")
                    prop:value=move || bank.get()
                    on:input=move |ev| set_bank.set(event_target_value(&ev))
                />
                <label class="field-inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |_| set_is_active.update(|v| *v = !*v)
                    />
                    <span>{move || lang.t("status.active")}</span>
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
                    each=move || cards.get()
                    key=|card| card.id
                    children=move |card| {
                        let id = card.id;
                        let edit_card = card.clone();
                        let shown_number = if card.masked_number.is_empty() {
                            card.card_number.clone()
                        } else {
                            card.masked_number.clone()
                        };
                        let active_key = if card.is_active { "status.active" } else { "status.inactive" };
                        view! {
                            <li class="settings-list-item">
                                <span class="item-title">{shown_number}</span>
                                <span class="item-meta">
                                    {format!("{} · {}", card.cardholder_name, card.bank_name)}
                                </span>
                                <span class="item-meta">{move || lang.t(active_key)}</span>
                                <button class="edit-btn" on:click=move |_| start_edit(edit_card.clone())>
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
