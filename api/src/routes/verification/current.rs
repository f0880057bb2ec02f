use actix_web::{web, HttpRequest, HttpResponse};

use cb_core::{CategoryRepository, EmailServiceTrait, VerificationRepository};

use crate::dto::{CurrentVerificationResponse, VerifiedSchool};
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::Language;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /school-verification
///
/// `data` is null when the caller has never completed a verification.
pub async fn current_verification<V, C, E>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<V, C, E>>,
) -> HttpResponse
where
    V: VerificationRepository + 'static,
    C: CategoryRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    match state
        .verification_service
        .current_verification(auth.user_id)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CurrentVerificationResponse {
            data: record.map(VerifiedSchool::from),
        }),
        Err(error) => handle_domain_error_with_lang(&error, Language::from_request(&req)),
    }
}
