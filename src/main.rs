//! Hotel back office server binary.
//!
//! Reads configuration from TOML file (~/.config/hotel-backoffice/config.toml).

use std::sync::Arc;
use std::time::Instant;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use hotel_backoffice::application::{
    AdminHandler, CustomerHandler, EmployeeHandler, InvoiceHandler, PermissionHandler,
    ReservationHandler, RoomHandler, ServiceHandler, Synchronizer,
};
use hotel_backoffice::config::AppConfig;
use hotel_backoffice::domain::permission::Permission;
use hotel_backoffice::domain::ports::BillingGateway;
use hotel_backoffice::domain::RepositoryProvider;
use hotel_backoffice::infrastructure::database::migrator::Migrator;
use hotel_backoffice::infrastructure::{HttpBillingGateway, RecordingBillingGateway};
use hotel_backoffice::shared::{retry_with_backoff, RetryConfig};
use hotel_backoffice::{
    create_api_router, default_config_path, init_database, AppState, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("HOTEL_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting hotel back office...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let db = retry_with_backoff(
        RetryConfig::default(),
        || init_database(&db_config),
        |_| true,
        "connect_database",
    )
    .await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed");

    // ── Repositories and billing gateway ───────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    seed_default_permissions(repos.as_ref(), &app_cfg.staff.default_permissions).await;

    let gateway: Arc<dyn BillingGateway> = match app_cfg.billing.provider.as_str() {
        "http" => {
            info!("Billing provider: {}", app_cfg.billing.api_base);
            Arc::new(HttpBillingGateway::new(
                app_cfg.billing.api_base.clone(),
                app_cfg.billing.secret_key.clone(),
                app_cfg.billing.timeout(),
            ))
        }
        other => {
            if other != "mock" {
                warn!("Unknown billing provider '{}', using mock", other);
            }
            info!("Billing provider: in-memory mock");
            Arc::new(RecordingBillingGateway::new())
        }
    };

    let sync = Arc::new(Synchronizer::new(db.clone(), gateway.clone()));

    // ── Use-case handlers ──────────────────────────────────────
    let default_permissions = app_cfg.staff.default_permissions.clone();
    let state = AppState {
        customers: Arc::new(CustomerHandler::new(
            repos.clone(),
            sync.clone(),
            gateway.clone(),
        )),
        reservations: Arc::new(ReservationHandler::new(
            repos.clone(),
            sync.clone(),
            gateway.clone(),
            app_cfg.billing.currency.clone(),
        )),
        invoices: Arc::new(InvoiceHandler::new(repos.clone(), sync.clone())),
        rooms: Arc::new(RoomHandler::new(repos.clone())),
        services: Arc::new(ServiceHandler::new(repos.clone())),
        employees: Arc::new(EmployeeHandler::new(
            repos.clone(),
            default_permissions.clone(),
        )),
        admins: Arc::new(AdminHandler::new(repos.clone(), default_permissions)),
        permissions: Arc::new(PermissionHandler::new(repos.clone())),
        db: db.clone(),
        started_at: Arc::new(Instant::now()),
    };

    // ── REST API server ────────────────────────────────────────
    let router = create_api_router(state);
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }
    info!("Hotel back office shutdown complete");
    Ok(())
}

/// Ensure the configured default staff permissions exist.
async fn seed_default_permissions(repos: &dyn RepositoryProvider, names: &[String]) {
    for name in names {
        match repos.permissions().find_by_name(name).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let permission = Permission::new(name.clone(), "Default staff permission");
                match repos.permissions().save(permission).await {
                    Ok(()) => info!(permission = %name, "Seeded default permission"),
                    Err(e) => warn!(permission = %name, error = %e, "Failed to seed permission"),
                }
            }
            Err(e) => warn!(permission = %name, error = %e, "Failed to check permission"),
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
