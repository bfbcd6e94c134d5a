//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api;
use crate::error;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RigOps Server",
        version = "0.3.0",
        description = "Operations backend for the fleet-maintenance / drilling dashboard"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::ping,
        api::health::health,
        api::health::ready,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::PingResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and ping endpoints")
    )
)]
pub struct ApiDoc;
