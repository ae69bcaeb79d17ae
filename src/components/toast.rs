//! Toast Host Component
//!
//! Renders the transient notification queue from the Toasts context.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();

    view! {
        <div class="toast-host">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
