//! Flight and Train Ticket Endpoints

use super::{ApiError, MaybePaged};
use crate::models::Ticket;

pub async fn list_flight() -> Result<Vec<Ticket>, ApiError> {
    let page: MaybePaged<Ticket> = super::get("/flight-tickets/").await?;
    Ok(page.into_vec())
}

pub async fn list_train() -> Result<Vec<Ticket>, ApiError> {
    let page: MaybePaged<Ticket> = super::get("/train-tickets/").await?;
    Ok(page.into_vec())
}
