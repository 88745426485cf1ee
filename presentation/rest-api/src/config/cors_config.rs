use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: Vite and Android emulator origins)
///
/// Configuration:
/// - Methods: GET, POST, PUT, OPTIONS
/// - Headers: content-type
/// - Credentials: Disabled (no authentication)
///
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
        "http://localhost:5173,http://10.0.2.2:8080".to_string()
    });

    let origins: Vec<&str> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .allow_credentials(false)
}
