use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cb_core::{CategoryRepository, EmailServiceTrait, VerificationRepository};

use crate::dto::{validation_error, ConfirmVerificationRequest, ConfirmVerificationResponse};
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::{get_message, Language};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for POST /verify-code
///
/// # Request Body
///
/// ```json
/// { "code": "123456", "email": "student@konkuk.ac.kr", "slug": "konkuk" }
/// ```
///
/// # Response
///
/// ```json
/// { "data": null, "message": "School verification is complete" }
/// ```
pub async fn confirm_verification<V, C, E>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<V, C, E>>,
    body: web::Json<ConfirmVerificationRequest>,
) -> HttpResponse
where
    V: VerificationRepository + 'static,
    C: CategoryRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let lang = Language::from_request(&req);

    if let Err(errors) = body.validate() {
        return handle_domain_error_with_lang(&validation_error(&errors), lang);
    }

    match state
        .verification_service
        .confirm_verification(auth.user_id, &body.code, &body.email, &body.slug)
        .await
    {
        Ok(record) => {
            log::info!(
                "User {} verified for school {}",
                record.user_id,
                record.school_id
            );
            HttpResponse::Ok().json(ConfirmVerificationResponse {
                data: None,
                message: get_message("verification_completed", lang),
            })
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
