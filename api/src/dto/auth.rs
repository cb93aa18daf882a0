use oa_shared::utils::is_valid_phone;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Local mobile number, `09` followed by nine digits
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    /// 6-digit code received for `phone_number`
    #[validate(custom(function = "validate_numeric"))]
    pub otp: String,
}

fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(invalid("invalid_phone_number", "phone number must match 09XXXXXXXXX"))
    }
}

fn validate_numeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("not_numeric", "otp must be numeric"))
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
