//! Payment Endpoints
//!
//! Ball top-up requests (approve/reject with the screenshot as evidence)
//! and the payment cards shown to drivers.

use serde::{Deserialize, Serialize};

use super::{ApiError, MaybePaged, Message};
use crate::models::{BallPayment, PaymentCard};

/// Moderation actions accepted by the confirm endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentAction {
    Approve,
    Reject,
}

#[derive(Serialize)]
struct ConfirmArgs<'a> {
    action: PaymentAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<&'a str>,
}

/// The confirm endpoint wraps the updated payment
#[derive(Deserialize)]
struct ConfirmResponse {
    payment: BallPayment,
}

pub async fn list() -> Result<Vec<BallPayment>, ApiError> {
    let page: MaybePaged<BallPayment> = super::get("/payments/").await?;
    Ok(page.into_vec())
}

pub async fn confirm(
    id: i64,
    action: PaymentAction,
    rejection_reason: Option<&str>,
) -> Result<BallPayment, ApiError> {
    let response: ConfirmResponse = super::post(
        &format!("/payments/{id}/confirm/"),
        &ConfirmArgs {
            action,
            rejection_reason,
        },
    )
    .await?;
    Ok(response.payment)
}

// ========================
// Payment cards
// ========================

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentCardForm {
    pub card_number: String,
    pub cardholder_name: String,
    pub bank_name: String,
    pub is_active: bool,
}

pub async fn list_cards() -> Result<Vec<PaymentCard>, ApiError> {
    let page: MaybePaged<PaymentCard> = super::get("/payment-cards/").await?;
    Ok(page.into_vec())
}

pub async fn create_card(form: &PaymentCardForm) -> Result<PaymentCard, ApiError> {
    super::post("/payment-cards/", form).await
}

pub async fn update_card(id: i64, form: &PaymentCardForm) -> Result<PaymentCard, ApiError> {
    super::put(&format!("/payment-cards/{id}/"), form).await
}

pub async fn delete_card(id: i64) -> Result<Message, ApiError> {
    super::delete(&format!("/payment-cards/{id}/")).await
}
