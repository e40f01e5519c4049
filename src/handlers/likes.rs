use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use std::collections::HashMap;

use crate::db::{like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::middleware::UserId;

/// Toggle the caller's like on a post
/// PUT /posts?id=<post_id>
///
/// The toggle runs in one transaction; the response is the post row re-read
/// after commit, carrying the adjusted like counter.
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse> {
    let post_id: i64 = query
        .get("id")
        .ok_or_else(|| AppError::BadRequest("Missing id query parameter".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid id query parameter".to_string()))?;

    let liked = like_repo::toggle_like(&pool, post_id, user_id.0).await?;

    let post = post_repo::find_post_by_id(&pool, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    tracing::info!(user_id = user_id.0, post_id, liked, "like toggled");

    Ok(HttpResponse::Ok().json(post))
}
