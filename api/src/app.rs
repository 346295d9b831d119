//! Application factory
//!
//! Builds the actix-web application with middleware, routes, and state.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use hl_core::repositories::UserRepository;
use hl_core::services::reset::ResetMailer;
use hl_shared::config::CorsConfig;
use hl_shared::types::ApiMessage;

use crate::middleware::cors::create_cors;
use crate::routes::reset::{
    reset_credentials::reset_credentials, send_otp::send_otp, verify_otp::verify_otp, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, M>(
    app_state: web::Data<AppState<U, M>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            actix_web::body::EitherBody<tracing_actix_web::StreamSpan<actix_web::body::BoxBody>>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    M: ResetMailer + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Account-recovery routes
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(send_otp::<U, M>))
                .route("/verify-otp", web::post().to(verify_otp::<U, M>))
                .route(
                    "/reset-credentials",
                    web::post().to(reset_credentials::<U, M>),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hireline-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiMessage::fail("The requested resource was not found"))
}
