use actix_web::{web, HttpResponse};

use oa_core::repositories::UserRepository;
use oa_core::services::auth::RateLimiterTrait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::types::BasicResponse;

use crate::app::AppState;
use crate::dto::UserResponse;
use crate::handlers::{bad_request, handle_domain_error};

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<U, C, R>(
    state: web::Data<AppState<U, C, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
    R: RateLimiterTrait + 'static,
{
    let Ok(id) = path.trim().parse::<i64>() else {
        return bad_request("Invalid user ID");
    };

    match state.user_service.get_user(id).await {
        Ok(user) => HttpResponse::Ok().json(BasicResponse::success(
            200,
            "User retrieved successfully",
            UserResponse::from(user),
        )),
        Err(error) => handle_domain_error(&error),
    }
}
