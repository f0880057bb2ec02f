//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it against the configured HS256 secret, and injects the caller's
//! context into the request.
//!
//! The middleware works in two modes:
//! 1. Required: requests without a valid token are answered with 401
//! 2. Optional: anonymous requests pass through; a presented token must still be valid

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use thiserror::Error;
use uuid::Uuid;

use cb_core::{errors::DomainError, SessionClaims};
use cb_shared::JwtConfig;

use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::Language;

/// Why a request could not be authenticated
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing or invalid Authorization header")]
    MissingToken,

    #[error("Token verification failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token subject is not a valid user id")]
    InvalidSubject,
}

impl AuthError {
    /// Localized 401 response
    pub fn to_response(&self, lang: Language) -> HttpResponse {
        handle_domain_error_with_lang(&DomainError::Unauthorized, lang)
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(Language::English)
    }
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID taken from the `sub` claim
    pub user_id: Uuid,
    /// Account email, if present in the token
    pub email: Option<String>,
    /// Provider role, if present in the token
    pub role: Option<String>,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: SessionClaims) -> Result<Self, AuthError> {
        let user_id = claims.user_id().map_err(|_| AuthError::InvalidSubject)?;
        Ok(Self {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Verifies bearer tokens against the configured secret
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)?;
        AuthContext::from_claims(token_data.claims)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Rc<JwtVerifier>,
    required: bool,
}

impl JwtAuth {
    /// Middleware that rejects unauthenticated requests
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            verifier: Rc::new(JwtVerifier::new(config)),
            required: true,
        }
    }

    /// Middleware that lets anonymous requests through
    pub fn optional(config: &JwtConfig) -> Self {
        Self {
            required: false,
            ..Self::new(config)
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Rc::clone(&self.verifier),
            required: self.required,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Rc<JwtVerifier>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Rc::clone(&self.verifier);
        let required = self.required;

        Box::pin(async move {
            let outcome = match extract_bearer_token(&req) {
                Some(token) => verifier.verify(&token).map(Some),
                None if required => Err(AuthError::MissingToken),
                None => Ok(None),
            };

            match outcome {
                Ok(Some(auth_context)) => {
                    req.extensions_mut().insert(auth_context);
                }
                Ok(None) => {}
                Err(e) => {
                    log::debug!("Rejecting {} {}: {}", req.method(), req.path(), e);
                    let response = e.to_response(Language::from_request(req.request()));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::MissingToken);

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn claims(sub: &str, exp_offset: i64) -> SessionClaims {
        SessionClaims {
            sub: sub.to_string(),
            email: Some("student@konkuk.ac.kr".to_string()),
            role: Some("authenticated".to_string()),
            exp: chrono::Utc::now().timestamp() + exp_offset,
            iat: None,
        }
    }

    fn sign(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[::std::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[::std::prelude::v1::test]
    fn test_verifier_accepts_valid_token() {
        let user_id = Uuid::new_v4();
        let verifier = JwtVerifier::new(&JwtConfig::new("secret"));
        let context = verifier
            .verify(&sign(&claims(&user_id.to_string(), 3600), "secret"))
            .unwrap();

        assert_eq!(context.user_id, user_id);
        assert_eq!(context.role.as_deref(), Some("authenticated"));
    }

    #[::std::prelude::v1::test]
    fn test_verifier_rejects_bad_tokens() {
        let verifier = JwtVerifier::new(&JwtConfig::new("secret"));
        let user_id = Uuid::new_v4().to_string();

        let wrong_secret = sign(&claims(&user_id, 3600), "other-secret");
        assert!(matches!(verifier.verify(&wrong_secret), Err(AuthError::InvalidToken(_))));

        let expired = sign(&claims(&user_id, -3600), "secret");
        assert!(matches!(verifier.verify(&expired), Err(AuthError::InvalidToken(_))));

        let bad_subject = sign(&claims("not-a-uuid", 3600), "secret");
        assert!(matches!(verifier.verify(&bad_subject), Err(AuthError::InvalidSubject)));
    }

    #[::std::prelude::v1::test]
    fn test_verifier_checks_configured_audience() {
        #[derive(serde::Serialize)]
        struct WithAudience {
            sub: String,
            exp: i64,
            aud: String,
        }

        let token = encode(
            &Header::default(),
            &WithAudience {
                sub: Uuid::new_v4().to_string(),
                exp: chrono::Utc::now().timestamp() + 3600,
                aud: "authenticated".to_string(),
            },
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(JwtVerifier::new(&JwtConfig::new("secret")).verify(&token).is_ok());
        assert!(JwtVerifier::new(&JwtConfig::new("secret").with_audience("authenticated"))
            .verify(&token)
            .is_ok());
        assert!(JwtVerifier::new(&JwtConfig::new("secret").with_audience("service_role"))
            .verify(&token)
            .is_err());
    }
}
