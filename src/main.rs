use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use taxdesk::config::{Config, LogFormat};
use taxdesk::middleware::{ErrorHandler, RequestId};
use taxdesk::taxes::TaxEntryService;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taxdesk=debug,actix_web=info".into());
    match config.app.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Starting tax entry service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repository = config.storage.create_repository();
    let service = Arc::new(TaxEntryService::new(repository));
    service.probe().await.context("Tax entry storage is not usable")?;

    tracing::info!(
        backend = ?config.storage.backend,
        path = %config.storage.tax_entry_file.display(),
        "Tax entry storage initialized"
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::default(),
        };

        App::new()
            .app_data(web::Data::new(service.clone()))
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(taxdesk::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
