use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feed_service::db;
use feed_service::routes;
use feed_service::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing; production logs JSON for aggregation, development
    // stays human-readable. APP_ENV is read directly because the subscriber
    // must exist before configuration loading can report errors.
    let json_logs = std::env::var("APP_ENV")
        .map(|e| e.eq_ignore_ascii_case("production"))
        .unwrap_or(false);
    if json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting feed-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Database pool created and verified");

    // Schema bootstrap is fatal if it fails; handlers assume the tables exist
    db::ensure_schema(&pool).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to ensure feed schema: {e}"),
        )
    })?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in cors_config.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin().send_wildcard();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors
            .allow_any_method()
            .allow_any_header()
            .max_age(cors_config.max_age as usize);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
