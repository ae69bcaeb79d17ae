//! Dashboard Pages
//!
//! One module per page reachable from the sidebar, plus login.

mod dashboard;
mod drivers;
mod login;
mod orders;
mod payments;
mod ratings;
mod settings;
mod statistics;

pub use dashboard::DashboardPage;
pub use drivers::DriversPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use payments::PaymentsPage;
pub use ratings::RatingsPage;
pub use settings::SettingsPage;
pub use statistics::StatisticsPage;

/// Render a backend timestamp for display; unparsable input passes through
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(format_timestamp("2025-03-14T09:26:53+05:00"), "14.03.2025 09:26");
    }

    #[test]
    fn test_format_timestamp_naive() {
        assert_eq!(format_timestamp("2025-03-14T09:26:53"), "14.03.2025 09:26");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
