//! Health check endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::{DbPool, dbinfo};
use crate::error::{AppResult, ErrorResponse};

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Readiness check response.
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: &'static str,
    database: &'static str,
    /// Value of `dbinfo.dbversion`, if present.
    dbversion: Option<String>,
}

/// Health check endpoint.
///
/// Returns 200 if the service is running.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check endpoint.
///
/// Returns 200 if the database answers, 503 if it does not, and a JSON
/// error body if the version marker cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service unavailable", body = ErrorResponse),
        (status = 500, description = "Version marker unreadable", body = ErrorResponse)
    )
)]
#[get("/ready")]
pub async fn ready(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    if pool.ping().await.is_err() {
        return Ok(HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "NOT_READY".to_string(),
            message: "Database connection failed".to_string(),
        }));
    }

    let dbversion = dbinfo::get_db_version(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(ReadyResponse {
        status: "ready",
        database: "connected",
        dbversion,
    }))
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(ready);
}
