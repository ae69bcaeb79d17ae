//! Debounced Search
//!
//! A trailing-edge debounce signal plus the pure multi-field substring
//! filter that pages compose with their exact-match filters.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Idle interval before a search term is applied
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Returns a signal that trails `value` by `delay_ms`. Every change restarts
/// the timer; only the value that survives a full idle interval lands, so a
/// linear scan of the collection is not recomputed per keystroke.
pub fn use_debounced(value: Signal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = signal(value.get_untracked());
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let current = value.get();
        generation.update_value(|g| *g += 1);
        let scheduled = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // a newer keystroke supersedes this timer
            if generation.get_value() == scheduled {
                set_debounced.set(current);
            }
        });
    });

    debounced
}

/// Keep the items where at least one extracted field contains the term,
/// case-insensitively. An empty or whitespace-only term is the identity.
pub fn search_filter<T, F>(items: &[T], term: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<String>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, Direction, DriverApplication, User};

    fn make_user(id: i64, name: &str, phone: &str) -> User {
        User {
            id,
            username: format!("user{}", id),
            full_name: name.to_string(),
            phone: phone.to_string(),
            role: "driver".to_string(),
            balls: 0,
            language: "uz".to_string(),
            status: "active".to_string(),
            address: String::new(),
            travel_route: String::new(),
            date_joined: String::new(),
        }
    }

    fn make_driver(id: i64, name: &str, phone: &str, car_model: &str, car_number: &str) -> DriverApplication {
        DriverApplication {
            id,
            application_id: format!("APP-{}", id),
            user: make_user(id, name, phone),
            full_name: name.to_string(),
            phone: phone.to_string(),
            car_model: car_model.to_string(),
            car_number: car_number.to_string(),
            car_year: Some(2018),
            direction: Direction::Taxi,
            direction_display: String::new(),
            cargo_capacity: None,
            passport_image_url: None,
            license_image_url: None,
            sts_image_url: None,
            car_photo_url: None,
            assigned_admin_id: None,
            assigned_admin_username: None,
            assigned_at: None,
            status: ApplicationStatus::Pending,
            status_display: String::new(),
            rejection_reason: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            reviewed_at: None,
            invite_link_sent: false,
        }
    }

    fn driver_fields(driver: &DriverApplication) -> Vec<String> {
        vec![
            driver.full_name.clone(),
            driver.phone.clone(),
            driver.car_model.clone(),
            driver.car_number.clone(),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let drivers = vec![
            make_driver(1, "Anvar Karimov", "+998901112233", "Cobalt", "01A123BC"),
            make_driver(2, "Bobur Aliyev", "+998977654321", "Nexia", "01B456DE"),
        ];
        assert_eq!(search_filter(&drivers, "", driver_fields), drivers);
        assert_eq!(search_filter(&drivers, "   ", driver_fields), drivers);
    }

    #[test]
    fn test_phone_substring_match() {
        let drivers = vec![
            make_driver(1, "Anvar Karimov", "+998901112233", "Cobalt", "01A123BC"),
            make_driver(2, "Bobur Aliyev", "+998977654321", "Nexia", "01B456DE"),
            make_driver(3, "Davron Toshev", "+998905556677", "Spark", "01C789FG"),
        ];
        let found = search_filter(&drivers, "+99890", driver_fields);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|d| d.phone.contains("+99890")));
    }

    #[test]
    fn test_match_is_case_insensitive_across_fields() {
        let drivers = vec![
            make_driver(1, "Anvar Karimov", "+998901112233", "Cobalt", "01A123BC"),
            make_driver(2, "Bobur Aliyev", "+998977654321", "Nexia", "01B456DE"),
        ];
        let found = search_filter(&drivers, "cobalt", driver_fields);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let found = search_filter(&drivers, "bobur", driver_fields);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let drivers = vec![make_driver(1, "Anvar Karimov", "+998901112233", "Cobalt", "01A123BC")];
        assert!(search_filter(&drivers, "matiz", driver_fields).is_empty());
    }
}
