use actix_web::{web, HttpResponse};

use oa_core::repositories::UserRepository;
use oa_core::services::auth::RateLimiterTrait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::types::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Handler for GET /health
///
/// Answers `200` while the user store responds and `503` otherwise.
pub async fn health_check<U, C, R>(state: web::Data<AppState<U, C, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
    R: RateLimiterTrait + 'static,
{
    let backend = state.user_service.backend();
    let user_store = match state.user_service.health_check().await {
        Ok(()) => (HealthStatus::Up, Some(backend.to_string())),
        Err(error) => {
            tracing::warn!(backend, error = %error, "User store health check failed");
            (HealthStatus::Down, Some(format!("{}: {}", backend, error)))
        }
    };

    let health = HealthResponse::new(env!("CARGO_PKG_VERSION"))
        .with_service("otp_store", HealthStatus::Up, Some(String::from("memory")))
        .with_service("user_store", user_store.0, user_store.1);

    match health.status {
        HealthStatus::Up => HttpResponse::Ok().json(health),
        HealthStatus::Down => HttpResponse::ServiceUnavailable().json(health),
    }
}
