//! Bot, Group, Reminder, and Ball Package Endpoints

use serde::{Deserialize, Serialize};

use super::{ApiError, MaybePaged, Message};
use crate::models::{
    BallPackage, BotSettings, GroupSettings, PaymentReminderSettings, ServiceType,
};

// ========================
// Bot settings
// ========================

/// Only changed fields are sent; the backend keeps the rest
#[derive(Debug, Clone, Default, Serialize)]
pub struct BotSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotSettingsResponse {
    #[serde(default)]
    pub message: String,
    pub settings: BotSettings,
}

pub async fn bot_settings() -> Result<BotSettings, ApiError> {
    super::get("/bot-settings/").await
}

pub async fn update_bot_settings(update: &BotSettingsUpdate) -> Result<BotSettingsResponse, ApiError> {
    super::put("/bot-settings/", update).await
}

// ========================
// Group settings
// ========================

pub async fn group_settings() -> Result<GroupSettings, ApiError> {
    super::get("/admin/group-settings/").await
}

pub async fn update_group_settings(settings: &GroupSettings) -> Result<GroupSettings, ApiError> {
    super::put("/admin/group-settings/", settings).await
}

// ========================
// Payment reminder
// ========================

#[derive(Serialize)]
struct ReminderArgs {
    reminder_day: u8,
    is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReminderResponse {
    #[serde(default)]
    pub message: String,
    pub settings: PaymentReminderSettings,
}

pub async fn payment_reminder() -> Result<PaymentReminderSettings, ApiError> {
    super::get("/payment-reminder/").await
}

pub async fn update_payment_reminder(
    reminder_day: u8,
    is_active: bool,
) -> Result<ReminderResponse, ApiError> {
    super::put(
        "/payment-reminder/",
        &ReminderArgs {
            reminder_day,
            is_active,
        },
    )
    .await
}

/// Fire the reminder once, outside its schedule
pub async fn test_payment_reminder() -> Result<Message, ApiError> {
    super::get("/payment-reminder/test/").await
}

// ========================
// Ball packages
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct BallPackageForm {
    pub package_name: String,
    pub service_type: ServiceType,
    pub ball_count: u32,
    pub price: f64,
    pub discount_percentage: f64,
    pub is_active: bool,
    pub is_popular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub async fn list_ball_packages() -> Result<Vec<BallPackage>, ApiError> {
    let page: MaybePaged<BallPackage> = super::get("/ball-packages/").await?;
    Ok(page.into_vec())
}

pub async fn create_ball_package(form: &BallPackageForm) -> Result<BallPackage, ApiError> {
    super::post("/ball-packages/", form).await
}

pub async fn update_ball_package(id: i64, form: &BallPackageForm) -> Result<BallPackage, ApiError> {
    super::put(&format!("/ball-packages/{id}/"), form).await
}

pub async fn delete_ball_package(id: i64) -> Result<Message, ApiError> {
    super::delete(&format!("/ball-packages/{id}/")).await
}
