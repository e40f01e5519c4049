use sqlx::PgPool;
use tracing::info;

/// Ensure the service's tables exist.
///
/// Created lazily at startup so fresh environments (developer machines, CI)
/// come up without a separate migration step. Statement order follows the
/// foreign keys: users before posts, posts before likes and comments.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring feed tables exist");

    sqlx::query(USERS_TABLE).execute(pool).await?;
    sqlx::query(POSTS_TABLE).execute(pool).await?;
    sqlx::query(POST_LIKES_TABLE).execute(pool).await?;
    sqlx::query(COMMENTS_TABLE).execute(pool).await?;

    Ok(())
}

const USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    image VARCHAR(255),
    description TEXT,
    likes INT NOT NULL DEFAULT 0,
    user_id BIGINT NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const POST_LIKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS post_likes (
    post_id BIGINT NOT NULL REFERENCES posts(id),
    user_id BIGINT NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (post_id, user_id)
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id BIGSERIAL PRIMARY KEY,
    post_id BIGINT NOT NULL REFERENCES posts(id),
    user_id BIGINT NOT NULL REFERENCES users(id),
    text TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
