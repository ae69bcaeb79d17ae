//! Authentication Endpoints
//!
//! Login issues the bearer token the rest of the client injects.

use serde::{Deserialize, Serialize};

use super::{ApiError, Message};
use crate::models::User;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    super::post("/login/", &LoginArgs { username, password }).await
}

pub async fn logout() -> Result<Message, ApiError> {
    super::post_empty("/logout/").await
}

pub async fn current_user() -> Result<User, ApiError> {
    super::get("/user/me/").await
}
