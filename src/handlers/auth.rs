use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::security;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Log in with email + password
/// POST /login
///
/// Passwords are compared byte-for-byte against the stored plaintext. Both
/// failure cases return 401; the body text tells them apart. The returned
/// token is generated fresh and never persisted.
pub async fn login(pool: web::Data<PgPool>, req: web::Json<LoginRequest>) -> Result<HttpResponse> {
    let user = user_repo::find_by_email(&pool, &req.email)
        .await?
        .ok_or_else(|| AppError::InvalidCredentials("User not found".to_string()))?;

    if user.password != req.password {
        tracing::warn!(user_id = user.id, "login rejected: password mismatch");
        return Err(AppError::InvalidCredentials("Incorrect password".to_string()));
    }

    let token = security::generate_token(user.id, &user.email);

    tracing::info!(user_id = user.id, "login succeeded");

    Ok(HttpResponse::Ok().json(LoginResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}
