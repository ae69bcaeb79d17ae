//! Statistics Endpoints

use serde::Deserialize;

use super::ApiError;
use crate::models::{DetailedStatistics, DriverStatistics, Statistics};

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

/// Overview figures for the dashboard landing page
pub async fn general() -> Result<Statistics, ApiError> {
    super::get("/stats/general/").await
}

pub async fn driver(driver_id: i64) -> Result<DriverStatistics, ApiError> {
    super::get(&format!("/stats/driver/{driver_id}/")).await
}

/// Detailed breakdown for the statistics page
pub async fn detailed() -> Result<DetailedStatistics, ApiError> {
    super::get("/admin/statistics/").await
}

pub async fn health() -> Result<HealthStatus, ApiError> {
    super::get("/health/").await
}
