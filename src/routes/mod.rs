use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `timestamp` in ISO 8601
///     format, and `service` (the service name)
pub mod health;

/// # Root Endpoint
///
/// Returns a welcome message pointing at the interactive API documentation.
///
/// ## Response
///
/// - **200 OK**: JSON object with `message` and `docs` fields
pub mod root;

/// # API Route Configuration
///
/// Registers all endpoints at the root path.
///
/// ## Mounted Services
/// - Root endpoint (see [`root::configure_routes`] for details)
/// - Health check endpoint (see [`health::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET /       - Welcome message
/// GET /health - Service health status
/// ```
///
/// [`root::configure_routes`]: crate::routes::root::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(health::configure_routes);
}
