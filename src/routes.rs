//! Route configuration
//!
//! Centralized route setup. The three resources are the service's public
//! contract: `/usuarios`, `/login`, and `/posts` with its method dispatch
//! (GET list, POST create-or-comment, PUT like toggle). Unrouted methods on
//! a known path answer 405; preflights answer 200.
use actix_web::{http::Method, web, HttpResponse};

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::resource("/usuarios")
                .route(web::post().to(handlers::register))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/login")
                .route(web::post().to(handlers::login))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(handlers::list_posts))
                .route(web::post().to(handlers::create_post))
                .route(web::put().to(handlers::toggle_like))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
}

/// OPTIONS on a known path when the CORS layer has not already answered it
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}
