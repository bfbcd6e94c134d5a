//! Health check and ping endpoints.

use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use utoipa::ToSchema;

use crate::db::DbPool;

/// Fixed message returned by the ping endpoint.
const PING_MESSAGE: &str = "RigOps API is reachable";

/// Ping response. `url` and `method` echo the request exactly.
#[derive(Serialize, ToSchema)]
pub struct PingResponse {
    status: &'static str,
    message: &'static str,
    url: String,
    method: String,
    timestamp: String,
}

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
}

/// Most recent ping timestamp, microseconds since the epoch.
static LAST_PING_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Current time, clamped so successive calls never move backwards within
/// this process even when the wall clock steps back.
fn monotonic_now() -> DateTime<Utc> {
    let now = Utc::now().timestamp_micros();
    let prev = LAST_PING_MICROS.fetch_max(now, Ordering::AcqRel);
    let clamped = now.max(prev);
    DateTime::from_timestamp_micros(clamped).unwrap_or_else(Utc::now)
}

/// Ping endpoint.
///
/// Answers any HTTP method (and, via the default service, any path) with a
/// fixed pong payload echoing the request's URL and method.
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service answers", body = PingResponse)
    )
)]
pub async fn ping(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(PingResponse {
        status: "pong",
        message: PING_MESSAGE,
        url: req.uri().to_string(),
        method: req.method().to_string(),
        timestamp: monotonic_now().to_rfc3339(),
    })
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
/// Returns 200 if the service is ready to accept requests (database connected).
#[utoipa::path(
    get,
    path = "/api/v1/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service unavailable")
    )
)]
#[get("/ready")]
pub async fn ready(pool: web::Data<DbPool>) -> HttpResponse {
    // Try a simple query to verify database connectivity
    let conn = pool.connection();
    let stmt =
        sea_orm::Statement::from_string(sea_orm::DatabaseBackend::Postgres, "SELECT 1".to_owned());
    match conn.query_one(stmt).await {
        Ok(_) => HttpResponse::Ok().json(ReadyResponse {
            status: "ready",
            database: "connected",
        }),
        Err(_) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "NOT_READY",
            "message": "Database connection failed"
        })),
    }
}

/// Configure health routes. The ping route accepts every HTTP method.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(ready)
        .route("/ping", web::route().to(ping));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_now_never_decreases() {
        let mut previous = monotonic_now();
        for _ in 0..200 {
            let current = monotonic_now();
            assert!(current >= previous, "timestamps must not move backwards");
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_now_is_rfc3339() {
        let stamp = monotonic_now().to_rfc3339();
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
