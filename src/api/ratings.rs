//! Rating Endpoints

use super::{ApiError, MaybePaged};
use crate::models::{DriverRatingSummary, Rating};

pub async fn list() -> Result<Vec<Rating>, ApiError> {
    let page: MaybePaged<Rating> = super::get("/ratings/").await?;
    Ok(page.into_vec())
}

/// Aggregated per-driver summaries for the ratings page
pub async fn driver_summaries() -> Result<Vec<DriverRatingSummary>, ApiError> {
    let page: MaybePaged<DriverRatingSummary> = super::get("/admin/driver-ratings/").await?;
    Ok(page.into_vec())
}
