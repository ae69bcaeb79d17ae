//! Status Badge Component

use leptos::prelude::*;

/// Visual tone for a backend status string
pub fn badge_tone(status: &str) -> &'static str {
    match status {
        "approved" | "accepted" | "active" | "completed" => "success",
        "rejected" | "cancelled" | "banned" => "danger",
        "pending" => "warning",
        "assigned" => "info",
        _ => "muted",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String, #[prop(into)] label: String) -> impl IntoView {
    let tone = badge_tone(&status);
    view! { <span class=format!("badge badge-{tone}")>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_tone_mapping() {
        assert_eq!(badge_tone("pending"), "warning");
        assert_eq!(badge_tone("approved"), "success");
        assert_eq!(badge_tone("accepted"), "success");
        assert_eq!(badge_tone("rejected"), "danger");
        assert_eq!(badge_tone("cancelled"), "danger");
        assert_eq!(badge_tone("assigned"), "info");
        assert_eq!(badge_tone("whatever"), "muted");
    }
}
