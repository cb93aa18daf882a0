//! Mapping from domain errors to HTTP responses
//!
//! Every response body uses the `{statusCode, status, error, message}`
//! envelope. Server-side failures never echo internal error text.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use oa_core::errors::{AuthError, DomainError, OtpError, TokenError};
use oa_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Extension trait turning the shared envelope into an actix response
pub trait ErrorResponseExt {
    fn to_response(&self) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

/// Convert a domain error into the matching HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            ErrorResponse::new(400, error_codes::VALIDATION_ERROR, message.as_str()).to_response()
        }
        DomainError::NotFound { resource } => ErrorResponse::new(
            404,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )
        .to_response(),
        DomainError::Persistence { .. } => {
            server_error(error, error_codes::PERSISTENCE_ERROR, "Failed to save user")
        }
        DomainError::Internal { .. } => {
            server_error(error, error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Otp(otp_error) => match otp_error {
            OtpError::Generation { .. } => server_error(
                error,
                error_codes::OTP_GENERATION_FAILED,
                "Failed to generate OTP",
            ),
            OtpError::NotFound => ErrorResponse::new(
                404,
                error_codes::OTP_NOT_FOUND,
                "OTP expired or not found",
            )
            .to_response(),
            OtpError::InvalidState => server_error(
                error,
                error_codes::OTP_INVALID_STATE,
                "Invalid OTP format in store",
            ),
            OtpError::Mismatch => {
                ErrorResponse::new(401, error_codes::OTP_MISMATCH, "Invalid OTP").to_response()
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::Config { .. } => server_error(
                error,
                error_codes::TOKEN_CONFIG_ERROR,
                "Token configuration error",
            ),
            TokenError::Signing { .. } => server_error(
                error,
                error_codes::TOKEN_SIGNING_ERROR,
                "Failed to generate token",
            ),
            TokenError::Invalid { .. } => {
                ErrorResponse::new(401, error_codes::INVALID_TOKEN, "Invalid token").to_response()
            }
        },
    }
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::InvalidPhoneFormat { .. } => ErrorResponse::new(
            400,
            error_codes::VALIDATION_ERROR,
            "Invalid phone number format",
        )
        .to_response(),
        AuthError::RateLimitExceeded {
            retry_after_seconds,
        } => {
            let minutes = error.retry_after_minutes().unwrap_or(1);
            let body = ErrorResponse::new(
                429,
                error_codes::RATE_LIMIT_EXCEEDED,
                format!("Too many requests, try again after {} minutes", minutes),
            )
            .add_detail("retry_after_seconds", retry_after_seconds);

            HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()))
                .json(body)
        }
    }
}

fn server_error(error: &DomainError, code: &str, message: &str) -> HttpResponse {
    tracing::error!(error = %error, code, "Request failed with server error");
    ErrorResponse::new(500, code, message).to_response()
}

/// 400 response for a body that failed `validator` checks
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .into_keys()
        .map(|field| field.to_string())
        .collect();

    ErrorResponse::new(400, error_codes::VALIDATION_ERROR, "Invalid request data")
        .add_detail("fields", fields)
        .add_detail("errors", errors)
        .to_response()
}

/// 400 response with a free-form message
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    ErrorResponse::new(400, error_codes::BAD_REQUEST, message).to_response()
}

/// Reject unparseable JSON bodies with the standard envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected malformed JSON body");
    let response = bad_request(format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}
