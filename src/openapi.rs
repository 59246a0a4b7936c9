use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. This documentation serves as the source of truth for the
/// interactive documentation served at `/docs` and `/redoc`.
///
/// # Endpoints
/// - Root: `GET /`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
///
/// # Tags
/// 1. **Health**: Service health monitoring endpoints
/// 2. **Root**: Service welcome endpoint
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health monitoring endpoints"),
        (name = "Root", description = "Service welcome endpoint")
    ),
    info(
        description = "A minimal FastAPI service with health check endpoint",
        title = "Simple FastAPI Service",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
