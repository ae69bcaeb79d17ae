//! UI Components
//!
//! Reusable Leptos components and the settings sections.

mod ball_packages;
mod bot_settings;
mod branding_settings;
mod data_table;
mod delete_confirm_button;
mod group_settings;
mod header;
mod language_toggle;
mod location_management;
mod payment_cards;
mod payment_reminder;
mod sidebar;
mod stat_card;
mod status_badge;
mod toast;

pub use ball_packages::BallPackagesSection;
pub use bot_settings::BotSettingsSection;
pub use branding_settings::BrandingSection;
pub use data_table::{card_renderer, page_slice, DataTable, RenderFn, TableColumn, DEFAULT_PAGE_SIZE};
pub use delete_confirm_button::DeleteConfirmButton;
pub use group_settings::GroupSettingsSection;
pub use header::Header;
pub use language_toggle::LanguageToggle;
pub use location_management::LocationManagementSection;
pub use payment_cards::PaymentCardsSection;
pub use payment_reminder::PaymentReminderSection;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_badge::{badge_tone, StatusBadge};
pub use toast::ToastHost;
