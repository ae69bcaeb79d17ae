//! Driver Application Endpoints
//!
//! Listing, moderation (approve/reject/assign), detail with rating
//! aggregates, and ball balance top-ups.

use serde::{Deserialize, Serialize};

use super::{ApiError, MaybePaged};
use crate::models::{DriverApplication, DriverDetail};

/// Moderation actions accepted by the approve endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverAction {
    Approve,
    Reject,
    Assign,
}

#[derive(Serialize)]
struct ApproveArgs<'a> {
    action: DriverAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<&'a str>,
}

/// The approve endpoint wraps the updated application
#[derive(Deserialize)]
struct ApproveResponse {
    application: DriverApplication,
}

#[derive(Serialize)]
struct AddBallsArgs {
    amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBallsResponse {
    #[serde(default)]
    pub message: String,
    pub new_balance: i64,
}

pub async fn list() -> Result<Vec<DriverApplication>, ApiError> {
    let page: MaybePaged<DriverApplication> = super::get("/drivers/").await?;
    Ok(page.into_vec())
}

pub async fn get(id: i64) -> Result<DriverApplication, ApiError> {
    super::get(&format!("/drivers/{id}/")).await
}

/// Status transition is server-authoritative; callers mirror the returned
/// application into local state.
pub async fn moderate(
    id: i64,
    action: DriverAction,
    rejection_reason: Option<&str>,
) -> Result<DriverApplication, ApiError> {
    let response: ApproveResponse = super::post(
        &format!("/drivers/{id}/approve/"),
        &ApproveArgs {
            action,
            rejection_reason,
        },
    )
    .await?;
    Ok(response.application)
}

pub async fn detail(user_id: i64) -> Result<DriverDetail, ApiError> {
    super::get(&format!("/drivers/{user_id}/detail/")).await
}

pub async fn add_balls(user_id: i64, amount: i64) -> Result<AddBallsResponse, ApiError> {
    super::post(&format!("/drivers/{user_id}/detail/"), &AddBallsArgs { amount }).await
}
