//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are handled
//! inside the auth and complaints crates.

use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::Router;
use base64::Engine;
use base64::engine::general_purpose;
use complaints::{ComplaintConfig, DiskUploadStore, PgComplaintRepository, complaints_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,complaints=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    // Complaint configuration
    let complaint_config = ComplaintConfig {
        upload_dir: env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads")),
        ..ComplaintConfig::default()
    };

    let uploads = DiskUploadStore::new(&complaint_config.upload_dir);
    uploads.ensure_root().await?;

    let user_repo = PgUserRepository::new(pool.clone());
    let complaint_repo = PgComplaintRepository::new(pool.clone());

    // Build router: pages + auth actions + complaint actions share the
    // root paths, merged by method
    let app = Router::new()
        .merge(pages::pages_router(auth_config.clone()))
        .merge(auth_router(
            user_repo,
            auth_config,
            pages::HOME_SIGNED_IN,
        ))
        .merge(complaints_router(
            complaint_repo,
            uploads,
            &complaint_config,
        ))
        .nest_service(
            "/uploads",
            ServeDir::new(&complaint_config.upload_dir),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
