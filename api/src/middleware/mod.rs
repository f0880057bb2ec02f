pub mod auth;
pub mod cors;

pub use auth::{AuthContext, AuthError, JwtAuth, JwtVerifier, OptionalAuth};
pub use cors::create_cors;
