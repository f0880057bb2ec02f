//! Health endpoint
//!
//! Reports `503 Service Unavailable` when a registered database check fails.
//! Without a registered check only liveness is reported.

use actix_web::{web, HttpResponse};
use async_trait::async_trait;
use serde_json::json;

use cb_infra::database::DatabasePool;

/// Connectivity check for the backing database
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    async fn is_healthy(&self) -> bool;
}

#[async_trait]
impl DatabaseHealth for DatabasePool {
    async fn is_healthy(&self) -> bool {
        matches!(self.health_check().await, Ok(true))
    }
}

/// Health check endpoint handler
pub async fn health_check(database: Option<web::Data<dyn DatabaseHealth>>) -> HttpResponse {
    let database_status = match database {
        None => "not_configured",
        Some(database) if database.is_healthy().await => "up",
        Some(_) => "down",
    };

    let (mut response, status) = if database_status == "down" {
        log::warn!("Health check failed: database unreachable");
        (HttpResponse::ServiceUnavailable(), "unhealthy")
    } else {
        (HttpResponse::Ok(), "healthy")
    };

    response.json(json!({
        "status": status,
        "service": "campusboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
