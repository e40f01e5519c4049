use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::db::comment_repo;
use crate::error::{AppError, Result};
use crate::middleware::UserId;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Add a comment to a post
/// POST /posts?comment=<non-empty>&post_id=<id>
///
/// A nonexistent post surfaces as the foreign-key storage error, not 404.
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id: i64 = query
        .get("post_id")
        .ok_or_else(|| AppError::BadRequest("Missing post_id query parameter".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid post_id query parameter".to_string()))?;

    let req: CreateCommentRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let comment = comment_repo::create_comment(&pool, post_id, user_id.0, &req.text).await?;

    tracing::info!(
        user_id = user_id.0,
        post_id,
        comment_id = comment.id,
        "comment created"
    );

    Ok(HttpResponse::Created().json(comment))
}
