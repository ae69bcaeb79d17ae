//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the signed-in
//! session and the active dashboard page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Identified, User};
use crate::storage;

/// Dashboard pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Drivers,
    Orders,
    Payments,
    Ratings,
    Statistics,
    Settings,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in admin, mirrored from the `user_data` storage key
    pub user: Option<User>,
    /// Active dashboard page
    pub page: Page,
}

impl AppState {
    /// Rebuild session state from persistent storage at provider mount
    pub fn restore() -> Self {
        let user = storage::get(storage::USER_DATA)
            .and_then(|json| serde_json::from_str(&json).ok());
        Self {
            user,
            page: Page::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Collection Helpers
// ========================

/// Overwrite the item carrying the same server id with the returned object
pub fn replace_by_id<T: Identified>(items: &mut Vec<T>, updated: T) {
    if let Some(slot) = items.iter_mut().find(|item| item.ident() == updated.ident()) {
        *slot = updated;
    }
}

/// Drop the item carrying the given server id
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i64) {
    items.retain(|item| item.ident() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, Country, Direction, DriverApplication};

    fn make_country(id: i64, name: &str) -> Country {
        Country {
            id,
            code: String::new(),
            name_uz: name.to_string(),
            name_ru: String::new(),
            name_en: String::new(),
            name_tj: String::new(),
            name_kk: String::new(),
        }
    }

    #[test]
    fn test_replace_by_id_swaps_matching_item() {
        let mut items = vec![make_country(1, "Uzbekiston"), make_country(2, "Tojikiston")];
        replace_by_id(&mut items, make_country(2, "Qozog'iston"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name_uz, "Qozog'iston");
    }

    #[test]
    fn test_replace_by_id_ignores_unknown_id() {
        let mut items = vec![make_country(1, "Uzbekiston")];
        replace_by_id(&mut items, make_country(9, "Turkmaniston"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name_uz, "Uzbekiston");
    }

    #[test]
    fn test_remove_by_id() {
        let mut items = vec![make_country(1, "Uzbekiston"), make_country(2, "Tojikiston")];
        remove_by_id(&mut items, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    fn make_application(id: i64, status: ApplicationStatus) -> DriverApplication {
        DriverApplication {
            id,
            application_id: String::new(),
            user: User {
                id,
                username: format!("driver{}", id),
                full_name: "Anvar Karimov".to_string(),
                phone: "+998901112233".to_string(),
                role: "driver".to_string(),
                balls: 0,
                language: "uz".to_string(),
                status: String::new(),
                address: String::new(),
                travel_route: String::new(),
                date_joined: String::new(),
            },
            full_name: "Anvar Karimov".to_string(),
            phone: "+998901112233".to_string(),
            car_model: "Cobalt".to_string(),
            car_number: "01A123BC".to_string(),
            car_year: None,
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
            status,
            status_display: String::new(),
            rejection_reason: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            reviewed_at: None,
            invite_link_sent: false,
        }
    }

    // Approval mirrors the server response over the pending list item
    #[test]
    fn test_replace_by_id_mirrors_status_transition() {
        let mut items = vec![
            make_application(1, ApplicationStatus::Pending),
            make_application(2, ApplicationStatus::Pending),
        ];
        replace_by_id(&mut items, make_application(1, ApplicationStatus::Approved));
        assert_eq!(items[0].status, ApplicationStatus::Approved);
        assert_eq!(items[1].status, ApplicationStatus::Pending);
    }
}
