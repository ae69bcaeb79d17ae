//! Language Toggle Component

use leptos::prelude::*;

use crate::context::use_language;
use crate::i18n::Locale;

const LOCALES: &[(Locale, &str)] = &[(Locale::Uz, "UZ"), (Locale::Ru, "RU")];

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="language-toggle">
            {LOCALES
                .iter()
                .map(|&(locale, label)| {
                    let class = move || {
                        if lang.locale() == locale {
                            "lang-btn active"
                        } else {
                            "lang-btn"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| lang.set(locale)>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
