use actix_cors::Cors;
use actix_web::http::header;

const LOCAL_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Build CORS middleware for the given origins.
///
/// Falls back to the local frontend origins when `allowed_origins` is empty.
/// Only the methods the API serves are allowed.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::RETRY_AFTER,
        ])
        .max_age(3600);

    if allowed_origins.is_empty() {
        for origin in LOCAL_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
