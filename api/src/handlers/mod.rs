pub mod error;

pub use error::{
    bad_request, handle_domain_error, json_error_handler, validation_error_response,
    ErrorResponseExt,
};
