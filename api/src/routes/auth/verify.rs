use actix_web::{web, HttpResponse};
use validator::Validate;

use oa_core::repositories::UserRepository;
use oa_core::services::auth::RateLimiterTrait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::types::BasicResponse;
use oa_shared::utils::mask_phone;

use crate::app::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /api/v1/auth/verify
///
/// # Request Body
///
/// ```json
/// { "phone_number": "09123456789", "otp": "123456" }
/// ```
///
/// # Responses
///
/// - `200` login succeeded, `data.access_token` holds the bearer token
/// - `400` malformed body, phone number or code
/// - `401` the code does not match
/// - `404` no live code for this phone
/// - `500` stored code corrupt, user not saved, or token not issued
pub async fn verify_otp<U, C, R>(
    state: web::Data<AppState<U, C, R>>,
    request: web::Json<VerifyOtpRequest>,
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
            "Rejected OTP verification with invalid body"
        );
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .verify_otp(&request.phone_number, &request.otp)
        .await
    {
        Ok(response) => {
            HttpResponse::Ok().json(BasicResponse::success(200, "Login successful", response))
        }
        Err(error) => handle_domain_error(&error),
    }
}
