//! School verification route handlers
//!
//! - `POST /school-verification` sends a code to a school email address
//! - `POST /verify-code` confirms the code
//! - `GET /school-verification` returns the caller's verified school

pub mod confirm;
pub mod current;
pub mod request;

pub use confirm::confirm_verification;
pub use current::current_verification;
pub use request::request_verification;
