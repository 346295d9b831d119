//! Hireline API server binary.
//!
//! Loads configuration from the environment, connects the credential store
//! and the mail channel, and serves the account-recovery endpoints.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hl_core::services::reset::{OtpRegistry, ResetMailer, ResetService, ResetServiceConfig};
use hl_infra::database::{create_pool, MySqlUserRepository};
use hl_infra::email::{MockMailer, SmtpMailer};
use hl_shared::config::AppConfig;

use hl_api::app::create_app;
use hl_api::routes::reset::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "Starting Hireline API server");

    let pool = create_pool(&config.database).await?;
    let user_repository = Arc::new(MySqlUserRepository::new(pool));

    // The mailer selection fixes the concrete service type, so the server
    // is started from a helper generic over the mail channel.
    if config.email.use_mock {
        info!("Email delivery is mocked; reset codes are logged, not sent");
        run_server(config, user_repository, Arc::new(MockMailer::new())).await
    } else {
        let mailer = Arc::new(SmtpMailer::new(&config.email)?);
        run_server(config, user_repository, mailer).await
    }
}

async fn run_server<M>(
    config: AppConfig,
    user_repository: Arc<MySqlUserRepository>,
    mailer: Arc<M>,
) -> anyhow::Result<()>
where
    M: ResetMailer + 'static,
{
    let reset_config = ResetServiceConfig {
        delivery_timeout_secs: config.email.send_timeout_secs,
        ..Default::default()
    };
    let registry = Arc::new(OtpRegistry::with_config(&reset_config));
    let reset_service = Arc::new(ResetService::new(
        user_repository,
        mailer,
        registry,
        reset_config,
    ));
    let app_state = web::Data::new(AppState { reset_service });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server listening");

    let cors_config = config.cors.clone();
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
