//! Wire Models
//!
//! Data structures mirrored from the backend REST API. The client holds no
//! authoritative state; ids are always server-assigned.

use serde::{Deserialize, Serialize};

/// Platform user (client, driver, or admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub balls: i64,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub travel_route: String,
    #[serde(default)]
    pub date_joined: String,
}

/// Driver application review status; transitions are server-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Assigned,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Driver service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Taxi,
    Cargo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverApplication {
    pub id: i64,
    #[serde(default)]
    pub application_id: String,
    pub user: User,
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub car_year: Option<i32>,
    pub direction: Direction,
    #[serde(default)]
    pub direction_display: String,
    #[serde(default)]
    pub cargo_capacity: Option<f64>,
    #[serde(default)]
    pub passport_image_url: Option<String>,
    #[serde(default)]
    pub license_image_url: Option<String>,
    #[serde(default)]
    pub sts_image_url: Option<String>,
    #[serde(default)]
    pub car_photo_url: Option<String>,
    #[serde(default)]
    pub assigned_admin_id: Option<i64>,
    #[serde(default)]
    pub assigned_admin_username: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub status_display: String,
    #[serde(default)]
    pub rejection_reason: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub invite_link_sent: bool,
}

/// Per-star rating counts keyed "1".."5"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    #[serde(default, rename = "5")]
    pub five: u32,
    #[serde(default, rename = "4")]
    pub four: u32,
    #[serde(default, rename = "3")]
    pub three: u32,
    #[serde(default, rename = "2")]
    pub two: u32,
    #[serde(default, rename = "1")]
    pub one: u32,
}

/// Driver detail view: application plus optional rating/order aggregates.
/// Aggregates missing on the server side render as absent, not as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverDetail {
    #[serde(flatten)]
    pub application: DriverApplication,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_ratings: Option<u32>,
    #[serde(default)]
    pub rating_breakdown: Option<RatingBreakdown>,
    #[serde(default)]
    pub total_orders: Option<u32>,
    #[serde(default)]
    pub completed_orders: Option<u32>,
}

/// Order service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderCategory {
    Taxi,
    Parcel,
    Cargo,
}

impl OrderCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::Parcel => "parcel",
            Self::Cargo => "cargo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client: User,
    pub category: OrderCategory,
    #[serde(default)]
    pub category_display: String,
    pub from_location: String,
    pub to_location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub accepted_driver: Option<User>,
    pub status: OrderStatus,
    #[serde(default)]
    pub status_display: String,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub parcel_content: String,
    #[serde(default)]
    pub parcel_weight: String,
    #[serde(default)]
    pub parcel_size: String,
    #[serde(default)]
    pub cargo_type: String,
    #[serde(default)]
    pub cargo_weight: String,
    #[serde(default)]
    pub cargo_vehicle_type: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Ball top-up request submitted by a driver with a payment screenshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallPayment {
    pub id: i64,
    pub driver: User,
    pub amount: i64,
    #[serde(default)]
    pub screenshot: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub status_display: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub client: User,
    pub driver: User,
    pub score: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: String,
}

/// Flight and train brokering requests share one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub ticket_id: String,
    pub client: User,
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub passport_image_url: Option<String>,
    pub from_location: String,
    pub to_location: String,
    #[serde(default)]
    pub travel_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_display: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub admin_comment: String,
    #[serde(default)]
    pub admin_responded_at: Option<String>,
    #[serde(default)]
    pub admin_responded_by: Option<User>,
    #[serde(default)]
    pub created_at: String,
}

// ========================
// Reference locations
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_tj: String,
    #[serde(default)]
    pub name_kk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub country: i64,
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_tj: String,
    #[serde(default)]
    pub name_kk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub region: i64,
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_tj: String,
    #[serde(default)]
    pub name_kk: String,
}

// ========================
// Settings
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_link: String,
    #[serde(default)]
    pub channel_description: String,
    #[serde(default)]
    pub channel_username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSettings {
    #[serde(default)]
    pub admin_group_id: String,
    #[serde(default)]
    pub taxi_parcel_group_id: String,
    #[serde(default)]
    pub avia_train_group_id: String,
    #[serde(default)]
    pub cargo_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReminderSettings {
    pub reminder_day: u8,
    pub is_active: bool,
    #[serde(default)]
    pub last_sent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCard {
    pub id: i64,
    pub card_number: String,
    pub cardholder_name: String,
    #[serde(default)]
    pub bank_name: String,
    pub is_active: bool,
    #[serde(default)]
    pub masked_number: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Service bucket a ball package applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    TaxiParcel,
    Cargo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallPackage {
    pub id: i64,
    pub package_name: String,
    pub service_type: ServiceType,
    pub ball_count: u32,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

// ========================
// Statistics
// ========================

/// General overview figures for the dashboard landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_drivers: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_payments: u64,
    #[serde(default)]
    pub pending_applications: u64,
    #[serde(default)]
    pub pending_payments: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub orders_by_category: OrdersByCategory,
    #[serde(default)]
    pub orders_by_status: OrdersByStatus,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
    #[serde(default)]
    pub recent_payments: Vec<BallPayment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersByCategory {
    #[serde(default)]
    pub taxi: u64,
    #[serde(default)]
    pub parcel: u64,
    #[serde(default)]
    pub cargo: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersByStatus {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub accepted: u64,
    #[serde(default)]
    pub cancelled: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub drivers: u64,
    #[serde(default)]
    pub clients: u64,
    #[serde(default)]
    pub new_today: u64,
    #[serde(default)]
    pub new_week: u64,
    #[serde(default)]
    pub new_month: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub today: u64,
    #[serde(default)]
    pub week: u64,
    #[serde(default)]
    pub month: u64,
    #[serde(default)]
    pub by_category: OrdersByCategory,
    #[serde(default)]
    pub by_status: OrdersByStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default)]
    pub total_balls_paid: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub rejected: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketStats {
    #[serde(default)]
    pub flight: TicketCounts,
    #[serde(default)]
    pub train: TicketCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub average: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub payments: u64,
    #[serde(default)]
    pub applications: u64,
}

/// Detailed breakdown shown on the statistics page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedStatistics {
    #[serde(default)]
    pub users: UserStats,
    #[serde(default)]
    pub orders: OrderStats,
    #[serde(default)]
    pub payments: PaymentStats,
    #[serde(default)]
    pub applications: ApplicationStats,
    #[serde(default)]
    pub tickets: TicketStats,
    #[serde(default)]
    pub ratings: RatingStats,
    #[serde(default)]
    pub recent_activity: RecentActivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentDriverRating {
    pub id: i64,
    pub score: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregated per-driver rating summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRatingSummary {
    pub driver_id: i64,
    pub driver_name: String,
    #[serde(default)]
    pub driver_phone: String,
    #[serde(default)]
    pub driver_username: String,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub total_ratings: u32,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub balls: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_joined: String,
    #[serde(default)]
    pub recent_ratings: Vec<RecentDriverRating>,
}

/// Per-driver statistics view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStatistics {
    pub driver: User,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub completed_orders: u32,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_ratings: u32,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
    #[serde(default)]
    pub recent_ratings: Vec<Rating>,
}

// ========================
// Identified-by-id helper
// ========================

/// Records addressable by their server-assigned id, for patch-by-id updates
pub trait Identified {
    fn ident(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn ident(&self) -> i64 {
                self.id
            }
        })*
    };
}

identified!(
    User,
    DriverApplication,
    Order,
    BallPayment,
    Rating,
    Ticket,
    Country,
    Region,
    City,
    PaymentCard,
    BallPackage,
);
