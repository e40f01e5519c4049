use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::handlers::comments;
use crate::middleware::UserId;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Create a post
/// POST /posts
///
/// The same method doubles as comment creation when the `comment` query
/// parameter is non-empty; the body is parsed after dispatching, since the
/// two operations carry different JSON shapes.
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let wants_comment = query.get("comment").map(|c| !c.is_empty()).unwrap_or(false);
    if wants_comment {
        return comments::add_comment(pool, user_id, query, body).await;
    }

    let req: CreatePostRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let post = post_repo::create_post(
        &pool,
        user_id.0,
        &req.name,
        req.image.as_deref(),
        req.description.as_deref(),
    )
    .await?;

    tracing::info!(user_id = user_id.0, post_id = post.id, "post created");

    Ok(HttpResponse::Created().json(post))
}

/// List the feed
/// GET /posts
///
/// No auth. All posts newest-first, each with the author's name and its
/// comments newest-first.
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let mut posts = post_repo::list_posts_with_authors(&pool).await?;

    for post in &mut posts {
        post.comments = comment_repo::get_comments_by_post(&pool, post.id).await?;
    }

    Ok(HttpResponse::Ok().json(posts))
}
