use actix_web::{web, HttpRequest, HttpResponse};

use cb_core::{CategoryRepository, EmailServiceTrait, VerificationRepository};

use crate::dto::BoardAccessResponse;
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::Language;
use crate::middleware::auth::OptionalAuth;
use crate::routes::AppState;

/// Handler for GET /boards/{slug}/access
///
/// Authentication is optional; anonymous callers get an answer too.
///
/// ```json
/// { "allowed": false, "reason": "different_school" }
/// ```
pub async fn board_access<V, C, E>(
    req: HttpRequest,
    auth: OptionalAuth,
    state: web::Data<AppState<V, C, E>>,
    slug: web::Path<String>,
) -> HttpResponse
where
    V: VerificationRepository + 'static,
    C: CategoryRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let user_id = auth.0.map(|context| context.user_id);

    match state.access_service.check_access(&slug, user_id).await {
        Ok(decision) => HttpResponse::Ok().json(BoardAccessResponse::from(decision)),
        Err(error) => handle_domain_error_with_lang(&error, Language::from_request(&req)),
    }
}
