/// HTTP middleware utilities for the feed service
///
/// Authentication is the service's header-identity scheme: the caller sends
/// a numeric `User-ID` header plus an opaque `Authorization` token. The id
/// must parse and match an existing user row; the token is required but its
/// value is never compared against anything.
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::AppError;

/// Authenticated caller id, extracted per request.
///
/// Handlers that require auth take this as a parameter; extraction failing
/// short-circuits the handler with 401.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

impl FromRequest for UserId {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw_id = req
                .headers()
                .get("User-ID")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| AppError::Authentication("Missing User-ID header".to_string()))?;

            if req.headers().get("Authorization").is_none() {
                return Err(
                    AppError::Authentication("Missing Authorization header".to_string()).into(),
                );
            }

            let user_id: i64 = raw_id
                .parse()
                .map_err(|_| AppError::Authentication("Invalid User-ID header".to_string()))?;

            let pool = req
                .app_data::<web::Data<PgPool>>()
                .ok_or_else(|| AppError::Internal("Database pool not configured".to_string()))?;

            let exists = user_repo::user_exists(pool, user_id)
                .await
                .map_err(AppError::Database)?;

            if !exists {
                return Err(AppError::Authentication("Unknown user".to_string()).into());
            }

            Ok(UserId(user_id))
        })
    }
}
