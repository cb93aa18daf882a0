use actix_web::{web, HttpResponse};
use validator::Validate;

use oa_core::repositories::UserRepository;
use oa_core::services::auth::RateLimiterTrait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::types::BasicResponse;
use oa_shared::utils::mask_phone;

use crate::app::AppState;
use crate::dto::RequestOtpRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /api/v1/auth/request
///
/// # Request Body
///
/// ```json
/// { "phone_number": "09123456789" }
/// ```
///
/// # Responses
///
/// - `200` code issued, `data.expires_in` holds its lifetime in seconds
/// - `400` malformed body or phone number
/// - `429` too many requests for this phone, with `Retry-After`
/// - `500` the code could not be generated
pub async fn request_otp<U, C, R>(
    state: web::Data<AppState<U, C, R>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
    R: RateLimiterTrait + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        tracing::info!(
            phone = %mask_phone(&request.phone_number),
            "Rejected OTP request with invalid body"
        );
        return validation_error_response(&errors);
    }

    match state.auth_service.request_otp(&request.phone_number).await {
        Ok(result) => {
            HttpResponse::Ok().json(BasicResponse::success(200, "OTP sent successfully", result))
        }
        Err(error) => handle_domain_error(&error),
    }
}
