//! Application state and factory
//!
//! This module holds the shared services and builds the Actix-web
//! application serving every route.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use oa_core::errors::DomainError;
use oa_core::repositories::UserRepository;
use oa_core::services::auth::{AuthService, AuthServiceConfig, RateLimitPolicy, RateLimiterTrait};
use oa_core::services::otp::{CacheServiceTrait, OtpService, OtpServiceConfig};
use oa_core::services::token::TokenService;
use oa_core::services::user::UserService;
use oa_infra::{InMemoryRateLimiter, OtpStore};
use oa_shared::errors::{error_codes, ErrorResponse};
use oa_shared::AppConfig;

use crate::handlers::{json_error_handler, ErrorResponseExt};
use crate::middleware::create_cors;
use crate::routes::{auth, health, users};

/// Application state that holds shared services
pub struct AppState<U, C, R>
where
    U: UserRepository,
    C: CacheServiceTrait,
    R: RateLimiterTrait,
{
    pub auth_service: Arc<AuthService<U, C, R>>,
    pub user_service: Arc<UserService<U>>,
}

impl<U, C, R> AppState<U, C, R>
where
    U: UserRepository,
    C: CacheServiceTrait,
    R: RateLimiterTrait,
{
    pub fn new(auth_service: Arc<AuthService<U, C, R>>, user_service: Arc<UserService<U>>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }
}

/// Wire the services used by the server around `user_repository`
///
/// The OTP store is passed in so the caller can shut its sweep down once
/// the server has stopped.
pub fn build_state<U>(
    config: &AppConfig,
    user_repository: Arc<U>,
    otp_store: Arc<OtpStore>,
) -> Result<AppState<U, OtpStore, InMemoryRateLimiter>, DomainError>
where
    U: UserRepository,
{
    let otp_rate_limit = RateLimitPolicy::try_from(&config.rate_limit.otp)?;

    let token_service = Arc::new(TokenService::new(config.jwt.clone()));
    if let Err(e) = token_service.access_lifetime() {
        tracing::warn!(error = %e, "Access token lifetime is not usable, logins will fail");
    }
    if !config.jwt.has_secret() {
        tracing::warn!("SECRET_KEY is not set, logins will fail");
    }

    let otp_service = Arc::new(OtpService::new(
        otp_store,
        OtpServiceConfig::from(&config.cache),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        otp_service,
        Arc::new(InMemoryRateLimiter::new()),
        token_service,
        AuthServiceConfig { otp_rate_limit },
    ));
    let user_service = Arc::new(UserService::new(user_repository));

    Ok(AppState::new(auth_service, user_service))
}

/// Create and configure the application with all dependencies
pub fn create_app<U, C, R>(
    app_state: web::Data<AppState<U, C, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
    R: RateLimiterTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors())
        // Wrapped last, so outermost: it also logs requests rejected by CORS
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check::<U, C, R>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/request", web::post().to(auth::request_otp::<U, C, R>))
                        .route("/verify", web::post().to(auth::verify_otp::<U, C, R>)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list_users::<U, C, R>))
                        .route("/{id}", web::get().to(users::get_user::<U, C, R>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new(
        404,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
    .to_response()
}
