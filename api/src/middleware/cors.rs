//! CORS middleware configuration for cross-origin requests.
//!
//! Outside production any origin is accepted so the web client can be served
//! from a dev server. In production only the configured origins are allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use cb_shared::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(&server.allowed_origins)
    } else {
        create_development_cors()
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");
    base_cors().allow_any_origin()
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = base_cors();
    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}
