pub mod error;

pub use error::{error_response, handle_domain_error, handle_domain_error_with_lang};
