use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Describes the service's HTTP surface with utoipa procedural macros. The
/// document is generated at compile time and is not served by the app.
///
/// # Endpoints
/// - Liveness: `GET /healthz`
/// - Readiness: `GET /readyz`
/// - Message: `GET /api/message`
///
/// # Schemas
/// - `HealthStatus`: probe payload
/// - `MessageResponse`: message payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::liveness,
        crate::routes::health::readiness,
        crate::routes::message::message,
    ),
    components(
        schemas(
            crate::models::health::HealthStatus,
            crate::models::message::MessageResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Liveness and readiness probes"),
        (name = "Message", description = "Fixed message with server time")
    ),
    info(
        description = "Minimal service exposing health probes and a timestamped message",
        title = "Message Service API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
