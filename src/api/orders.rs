//! Order Endpoints

use serde::{Deserialize, Serialize};

use super::{ApiError, MaybePaged};
use crate::models::Order;

#[derive(Serialize)]
struct AcceptArgs {
    driver_id: i64,
}

/// The accept endpoint wraps the updated order
#[derive(Deserialize)]
struct AcceptResponse {
    order: Order,
}

pub async fn list() -> Result<Vec<Order>, ApiError> {
    let page: MaybePaged<Order> = super::get("/orders/").await?;
    Ok(page.into_vec())
}

pub async fn get(id: i64) -> Result<Order, ApiError> {
    super::get(&format!("/orders/{id}/")).await
}

pub async fn accept(id: i64, driver_id: i64) -> Result<Order, ApiError> {
    let response: AcceptResponse =
        super::post(&format!("/orders/{id}/accept/"), &AcceptArgs { driver_id }).await?;
    Ok(response.order)
}
