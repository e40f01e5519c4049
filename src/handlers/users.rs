use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a new account
/// POST /usuarios
///
/// The created row is echoed back as-is, password included; a duplicate
/// email surfaces the storage error (500-class), not a dedicated conflict
/// status.
pub async fn register(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let user = user_repo::create_user(&pool, &req.name, &req.email, &req.password).await?;

    tracing::info!(user_id = user.id, "user registered");

    Ok(HttpResponse::Created().json(user))
}
