use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            // Microsecond precision with an explicit +00:00 offset
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            service: "fastapi-service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_healthy() {
        let response = HealthResponse::healthy();

        // Verify constant fields
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "fastapi-service");

        // Verify timestamp is valid ISO 8601 format
        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_health_response_timestamp_is_utc() {
        let response = HealthResponse::healthy();

        // The offset is serialized as +00:00, never Z or a local offset
        assert!(
            response.timestamp.ends_with("+00:00"),
            "Timestamp should carry an explicit UTC offset"
        );

        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp).unwrap();
        assert_eq!(parsed_time.offset().local_minus_utc(), 0);
    }
}
