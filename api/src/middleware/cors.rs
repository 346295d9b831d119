//! CORS middleware configuration.
//!
//! The hiring platform's web client is served from a separate origin, so
//! the API must answer preflight requests. Development allows any origin;
//! production restricts to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hl_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .max_age(config.max_age as usize);

    if config.is_permissive() {
        cors.allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
