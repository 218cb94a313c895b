//! LMS admin server - main entry point.
//!
//! Prepares the database (baseline schema and pending upgrades) and starts
//! the Actix-web server.

use actix_web::{App, HttpServer, web};
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use lms_admin_lib::api::{self, ApiDoc};
use lms_admin_lib::config::Config;
use lms_admin_lib::db::DbPool;
use lms_admin_lib::i18n::Translator;
use lms_admin_lib::middleware::RequestLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  LMS Admin Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = pool.run_migrations().await {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Baseline schema ready");

    if config.auto_upgrade {
        match pool.run_upgrades().await {
            Ok(applied) if applied.is_empty() => info!("Database is up to date"),
            Ok(applied) => info!("Applied upgrades: {}", applied.join(", ")),
            Err(e) => {
                error!("{}", e);
                error!("Fix the database and run `lms-upgrade apply` before restarting");
                std::process::exit(1);
            }
        }
    } else {
        info!("Automatic upgrades disabled (LMS_AUTO_UPGRADE=false)");
    }

    let bind_address = config.bind_address();
    let translator = Translator::new(config.language);

    let worker_count = if config.is_development() {
        2
    } else {
        num_cpus::get()
    };
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, worker_count
    );

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(translator))
            .configure(api::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
