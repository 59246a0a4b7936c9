use actix_web::{App, HttpServer, web};
use fastapi_service::openapi::ApiDoc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// FastAPI Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Root and health check endpoints (configured in routes)
/// - Swagger UI and Redoc for API documentation
/// - Environment configuration via `.env` file
/// - Structured logging via `tracing`
///
/// # Endpoints
/// - Root: `/`
/// - Health check: `/health`
/// - Swagger UI: `/docs/`
/// - Redoc: `/redoc`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default; override with the `HOST`
///   and `PORT` environment variables
/// - Environment variables loaded from `.env` file (if present)
/// - Log filtering via `RUST_LOG` (defaults to `info`)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    tracing::info!("starting server on {host}:{port} (docs at /docs, redoc at /redoc)");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(fastapi_service::routes::configure)
            .service(web::redirect("/docs", "/docs/"))
            .service(Redoc::with_url("/redoc", openapi.clone()))
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}
