//! CORS middleware configuration for cross-origin requests.
//!
//! Browser and mobile clients call the API from arbitrary origins, so any
//! origin is accepted. Preflight responses are cached for five minutes.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Preflight cache lifetime in seconds
pub const CORS_MAX_AGE: usize = 300;

/// Creates the CORS middleware used by every route
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE)
}
