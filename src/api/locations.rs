//! Reference Location Endpoints
//!
//! Country → region → city CRUD. Region and city listings filter by their
//! parent id; deletes cascade server-side.

use serde::Serialize;

use super::{ApiError, MaybePaged, Message};
use crate::models::{City, Country, Region};

/// Five localized names shared by every location level
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationNames {
    pub name_uz: String,
    pub name_ru: String,
    pub name_en: String,
    pub name_tj: String,
    pub name_kk: String,
}

#[derive(Serialize)]
struct CountryArgs<'a> {
    code: &'a str,
    #[serde(flatten)]
    names: &'a LocationNames,
}

#[derive(Serialize)]
struct RegionArgs<'a> {
    country: i64,
    #[serde(flatten)]
    names: &'a LocationNames,
}

#[derive(Serialize)]
struct CityArgs<'a> {
    region: i64,
    #[serde(flatten)]
    names: &'a LocationNames,
}

// ========================
// Countries
// ========================

pub async fn list_countries() -> Result<Vec<Country>, ApiError> {
    let page: MaybePaged<Country> = super::get("/admin/countries/").await?;
    Ok(page.into_vec())
}

pub async fn create_country(code: &str, names: &LocationNames) -> Result<Country, ApiError> {
    super::post("/admin/countries/", &CountryArgs { code, names }).await
}

pub async fn update_country(id: i64, code: &str, names: &LocationNames) -> Result<Country, ApiError> {
    super::put(&format!("/admin/countries/{id}/"), &CountryArgs { code, names }).await
}

pub async fn delete_country(id: i64) -> Result<Message, ApiError> {
    super::delete(&format!("/admin/countries/{id}/")).await
}

// ========================
// Regions
// ========================

pub async fn list_regions(country_id: Option<i64>) -> Result<Vec<Region>, ApiError> {
    let mut query = Vec::new();
    if let Some(id) = country_id {
        query.push(("country_id", id.to_string()));
    }
    let page: MaybePaged<Region> = super::get_query("/admin/regions/", &query).await?;
    Ok(page.into_vec())
}

pub async fn create_region(country: i64, names: &LocationNames) -> Result<Region, ApiError> {
    super::post("/admin/regions/", &RegionArgs { country, names }).await
}

pub async fn update_region(id: i64, country: i64, names: &LocationNames) -> Result<Region, ApiError> {
    super::put(&format!("/admin/regions/{id}/"), &RegionArgs { country, names }).await
}

pub async fn delete_region(id: i64) -> Result<Message, ApiError> {
    super::delete(&format!("/admin/regions/{id}/")).await
}

// ========================
// Cities
// ========================

pub async fn list_cities(region_id: Option<i64>) -> Result<Vec<City>, ApiError> {
    let mut query = Vec::new();
    if let Some(id) = region_id {
        query.push(("region_id", id.to_string()));
    }
    let page: MaybePaged<City> = super::get_query("/admin/cities/", &query).await?;
    Ok(page.into_vec())
}

pub async fn create_city(region: i64, names: &LocationNames) -> Result<City, ApiError> {
    super::post("/admin/cities/", &CityArgs { region, names }).await
}

pub async fn update_city(id: i64, region: i64, names: &LocationNames) -> Result<City, ApiError> {
    super::put(&format!("/admin/cities/{id}/"), &CityArgs { region, names }).await
}

pub async fn delete_city(id: i64) -> Result<Message, ApiError> {
    super::delete(&format!("/admin/cities/{id}/")).await
}
