/// User repository - handles all database operations for users
use crate::models::User;
use sqlx::PgPool;

/// Create a new user. The password is stored exactly as received; plaintext
/// credentials are part of this service's documented contract.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await
}

/// Find a user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Check whether a user row with this id exists
pub async fn user_exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}
