/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
/// - `service`: String identifying this service
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456+00:00",
///   "service": "fastapi-service"
/// }
/// ```
pub mod health;
