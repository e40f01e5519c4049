/// Comment repository
use crate::models::Comment;
use sqlx::PgPool;

/// Create a comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, text)
        VALUES ($1, $2, $3)
        RETURNING id, post_id, user_id, text, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .fetch_one(pool)
    .await
}

/// Comments for a post, newest first
pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, text, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
