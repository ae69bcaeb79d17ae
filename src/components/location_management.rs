//! Location Management Section
//!
//! Country → region → city reference data. Selecting a country refetches
//! its regions, selecting a region refetches its cities; each level has an
//! inline create/edit form with the five localized names.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::locations::LocationNames;
use crate::components::DeleteConfirmButton;
use crate::context::{use_language, use_toasts};
use crate::i18n::Locale;
use crate::models::{City, Country, Region};
use crate::store::{remove_by_id, replace_by_id};

/// Display name by active locale, falling back to the Uzbek name
pub fn localized_name(name_uz: &str, name_ru: &str, locale: Locale) -> String {
    match locale {
        Locale::Ru if !name_ru.is_empty() => name_ru.to_string(),
        _ => name_uz.to_string(),
    }
}

/// Five name inputs shared by all three levels
#[derive(Clone, Copy)]
struct NamesForm {
    uz: RwSignal<String>,
    ru: RwSignal<String>,
    en: RwSignal<String>,
    tj: RwSignal<String>,
    kk: RwSignal<String>,
}

impl NamesForm {
    fn new() -> Self {
        Self {
            uz: RwSignal::new(String::new()),
            ru: RwSignal::new(String::new()),
            en: RwSignal::new(String::new()),
            tj: RwSignal::new(String::new()),
            kk: RwSignal::new(String::new()),
        }
    }

    fn to_names(self) -> LocationNames {
        LocationNames {
            name_uz: self.uz.get(),
            name_ru: self.ru.get(),
            name_en: self.en.get(),
            name_tj: self.tj.get(),
            name_kk: self.kk.get(),
        }
    }

    fn load(self, uz: &str, ru: &str, en: &str, tj: &str, kk: &str) {
        self.uz.set(uz.to_string());
        self.ru.set(ru.to_string());
        self.en.set(en.to_string());
        self.tj.set(tj.to_string());
        self.kk.set(kk.to_string());
    }

    fn clear(self) {
        self.load("", "", "", "", "");
    }

    /// The Uzbek name is the one required field
    fn is_valid(self) -> bool {
        !self.uz.get().trim().is_empty()
    }
}

#[component]
fn NameInputs(form: NamesForm) -> impl IntoView {
    let lang = use_language();
    let fields = [
        (form.uz, "settings.name_uz"),
        (form.ru, "settings.name_ru"),
        (form.en, "settings.name_en"),
        (form.tj, "settings.name_tj"),
        (form.kk, "settings.name_kk"),
    ];
    view! {
        {fields
            .into_iter()
            .map(|(value, key)| {
                view! {
                    <input
                        type="text"
                        placeholder=move || lang.t(key)
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                }
            })
            .collect_view()}
    }
}

#[component]
pub fn LocationManagementSection() -> impl IntoView {
    let lang = use_language();
    let toasts = use_toasts();

    let (countries, set_countries) = signal(Vec::<Country>::new());
    let (regions, set_regions) = signal(Vec::<Region>::new());
    let (cities, set_cities) = signal(Vec::<City>::new());
    let (selected_country, set_selected_country) = signal(None::<i64>);
    let (selected_region, set_selected_region) = signal(None::<i64>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::locations::list_countries().await {
                Ok(loaded) => set_countries.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    // Unfiltered at mount, narrowed once a country is selected
    Effect::new(move |_| {
        let country_id = selected_country.get();
        spawn_local(async move {
            match api::locations::list_regions(country_id).await {
                Ok(loaded) => set_regions.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    // Unfiltered at mount, narrowed once a region is selected
    Effect::new(move |_| {
        let region_id = selected_region.get();
        spawn_local(async move {
            match api::locations::list_cities(region_id).await {
                Ok(loaded) => set_cities.set(loaded),
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    });

    // ---- country form ----
    let country_names = NamesForm::new();
    let (country_code, set_country_code) = signal(String::new());
    let (editing_country, set_editing_country) = signal(None::<i64>);

    let on_country_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !country_names.is_valid() {
            toasts.error(lang.t("error.required"));
            return;
        }
        let names = country_names.to_names();
        let code = country_code.get();
        let edit_id = editing_country.get();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::locations::update_country(id, &code, &names).await,
                None => api::locations::create_country(&code, &names).await,
            };
            match result {
                Ok(saved) => {
                    set_countries.update(|items| {
                        if edit_id.is_some() {
                            replace_by_id(items, saved);
                        } else {
                            items.push(saved);
                        }
                    });
                    country_names.clear();
                    set_country_code.set(String::new());
                    set_editing_country.set(None);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    let on_country_delete = move |id: i64| {
        spawn_local(async move {
            match api::locations::delete_country(id).await {
                Ok(_) => {
                    set_countries.update(|items| remove_by_id(items, id));
                    if selected_country.get_untracked() == Some(id) {
                        set_selected_country.set(None);
                    }
                    toasts.success(lang.t("common.deleted"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    // ---- region form ----
    let region_names = NamesForm::new();
    let (editing_region, set_editing_region) = signal(None::<i64>);

    let on_region_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(country_id) = selected_country.get() else {
            toasts.error(lang.t("error.required"));
            return;
        };
        if !region_names.is_valid() {
            toasts.error(lang.t("error.required"));
            return;
        }
        let names = region_names.to_names();
        let edit_id = editing_region.get();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::locations::update_region(id, country_id, &names).await,
                None => api::locations::create_region(country_id, &names).await,
            };
            match result {
                Ok(saved) => {
                    set_regions.update(|items| {
                        if edit_id.is_some() {
                            replace_by_id(items, saved);
                        } else {
                            items.push(saved);
                        }
                    });
                    region_names.clear();
                    set_editing_region.set(None);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    let on_region_delete = move |id: i64| {
        spawn_local(async move {
            match api::locations::delete_region(id).await {
                Ok(_) => {
                    set_regions.update(|items| remove_by_id(items, id));
                    if selected_region.get_untracked() == Some(id) {
                        set_selected_region.set(None);
                    }
                    toasts.success(lang.t("common.deleted"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    // ---- city form ----
    let city_names = NamesForm::new();
    let (editing_city, set_editing_city) = signal(None::<i64>);

    let on_city_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(region_id) = selected_region.get() else {
            toasts.error(lang.t("error.required"));
            return;
        };
        if !city_names.is_valid() {
            toasts.error(lang.t("error.required"));
            return;
        }
        let names = city_names.to_names();
        let edit_id = editing_city.get();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::locations::update_city(id, region_id, &names).await,
                None => api::locations::create_city(region_id, &names).await,
            };
            match result {
                Ok(saved) => {
                    set_cities.update(|items| {
                        if edit_id.is_some() {
                            replace_by_id(items, saved);
                        } else {
                            items.push(saved);
                        }
                    });
                    city_names.clear();
                    set_editing_city.set(None);
                    toasts.success(lang.t("common.saved"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    let on_city_delete = move |id: i64| {
        spawn_local(async move {
            match api::locations::delete_city(id).await {
                Ok(_) => {
                    set_cities.update(|items| remove_by_id(items, id));
                    toasts.success(lang.t("common.deleted"));
                }
                Err(error) => toasts.api_error(lang, &error),
            }
        });
    };

    view! {
        <section class="settings-section">
            <h2>{move || lang.t("settings.locations")}</h2>
            <div class="location-columns">
                // Countries
                <div class="location-column">
                    <h3>{move || lang.t("settings.countries")}</h3>
                    <form class="settings-form" on:submit=on_country_submit>
                        <input
                            type="text"
                            placeholder=move || lang.t("settings.country_code")
                            prop:value=move || country_code.get()
                            on:input=move |ev| set_country_code.set(event_target_value(&ev))
                        />
                        <NameInputs form=country_names />
                        <button type="submit">
                            {move || {
                                if editing_country.get().is_some() {
                                    lang.t("common.save")
                                } else {
                                    lang.t("common.add")
                                }
                            }}
                        </button>
                    </form>
                    <ul class="location-list">
                        <For
                            each=move || countries.get()
                            key=|country| country.id
                            children=move |country| {
                                let id = country.id;
                                let edit = country.clone();
                                let selected = move || selected_country.get() == Some(id);
                                view! {
                                    <li class=move || if selected() { "location-item selected" } else { "location-item" }>
                                        <button
                                            class="location-name"
                                            on:click=move |_| {
                                                set_selected_country.set(Some(id));
                                                set_selected_region.set(None);
                                            }
                                        >
                                            {move || localized_name(&country.name_uz, &country.name_ru, lang.locale())}
                                        </button>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing_country.set(Some(id));
                                                set_country_code.set(edit.code.clone());
                                                country_names
                                                    .load(&edit.name_uz, &edit.name_ru, &edit.name_en, &edit.name_tj, &edit.name_kk);
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |()| on_country_delete(id))
                                        />
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>

                // Regions of the selected country
                <div class="location-column">
                    <h3>{move || lang.t("settings.regions")}</h3>
                    <form class="settings-form" on:submit=on_region_submit>
                        <NameInputs form=region_names />
                        <button type="submit" disabled=move || selected_country.get().is_none()>
                            {move || {
                                if editing_region.get().is_some() {
                                    lang.t("common.save")
                                } else {
                                    lang.t("common.add")
                                }
                            }}
                        </button>
                    </form>
                    <ul class="location-list">
                        <For
                            each=move || regions.get()
                            key=|region| region.id
                            children=move |region| {
                                let id = region.id;
                                let edit = region.clone();
                                let selected = move || selected_region.get() == Some(id);
                                view! {
                                    <li class=move || if selected() { "location-item selected" } else { "location-item" }>
                                        <button
                                            class="location-name"
                                            on:click=move |_| set_selected_region.set(Some(id))
                                        >
                                            {move || localized_name(&region.name_uz, &region.name_ru, lang.locale())}
                                        </button>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing_region.set(Some(id));
                                                region_names
                                                    .load(&edit.name_uz, &edit.name_ru, &edit.name_en, &edit.name_tj, &edit.name_kk);
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |()| on_region_delete(id))
                                        />
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>

                // Cities of the selected region
                <div class="location-column">
                    <h3>{move || lang.t("settings.cities")}</h3>
                    <form class="settings-form" on:submit=on_city_submit>
                        <NameInputs form=city_names />
                        <button type="submit" disabled=move || selected_region.get().is_none()>
                            {move || {
                                if editing_city.get().is_some() {
                                    lang.t("common.save")
                                } else {
                                    lang.t("common.add")
                                }
                            }}
                        </button>
                    </form>
                    <ul class="location-list">
                        <For
                            each=move || cities.get()
                            key=|city| city.id
                            children=move |city| {
                                let id = city.id;
                                let edit = city.clone();
                                view! {
                                    <li class="location-item">
                                        <span class="location-name">
                                            {move || localized_name(&city.name_uz, &city.name_ru, lang.locale())}
                                        </span>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing_city.set(Some(id));
                                                city_names
                                                    .load(&edit.name_uz, &edit.name_ru, &edit.name_en, &edit.name_tj, &edit.name_kk);
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |()| on_city_delete(id))
                                        />
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_name_prefers_active_locale() {
        assert_eq!(localized_name("Toshkent", "Ташкент", Locale::Uz), "Toshkent");
        assert_eq!(localized_name("Toshkent", "Ташкент", Locale::Ru), "Ташкент");
    }

    #[test]
    fn test_localized_name_falls_back_to_uzbek() {
        assert_eq!(localized_name("Toshkent", "", Locale::Ru), "Toshkent");
    }
}
