/// Post repository - post rows and the feed listing query
use crate::models::{FeedPost, Post};
use sqlx::PgPool;

/// Create a new post with a zero like counter
pub async fn create_post(
    pool: &PgPool,
    user_id: i64,
    name: &str,
    image: Option<&str>,
    description: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (name, image, description, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, image, description, likes, user_id, created_at
        "#,
    )
    .bind(name)
    .bind(image)
    .bind(description)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Find a post by id
pub async fn find_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, name, image, description, likes, user_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all posts newest-first, each joined with the author's name.
///
/// Comments are attached by the caller; the row here carries an empty vec.
pub async fn list_posts_with_authors(pool: &PgPool) -> Result<Vec<FeedPost>, sqlx::Error> {
    sqlx::query_as::<_, FeedPost>(
        r#"
        SELECT p.id, p.name, p.image, p.description, p.likes, p.user_id,
               u.name AS author_name, p.created_at
        FROM posts p
        JOIN users u ON p.user_id = u.id
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
