/// Like repository - the toggle transaction and the helpers around it
use sqlx::PgPool;

/// Toggle the (post, user) like row and the post's denormalized counter in
/// one transaction. Returns `true` when the post is liked after the call.
///
/// Any failure rolls the whole transaction back, so the counter and the
/// like rows never drift. Two concurrent first-time toggles serialize on
/// the composite primary key; the loser's insert fails and its transaction
/// rolls back whole.
pub async fn toggle_like(pool: &PgPool, post_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let liked: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await?;

    if liked {
        sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE posts SET likes = likes - 1 WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
    } else {
        sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(!liked)
}

/// Check whether a (post, user) like row exists
pub async fn has_liked(pool: &PgPool, post_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Count like rows for a post; the posts.likes counter must equal this at rest
pub async fn count_likes_by_post(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM post_likes WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await
}
