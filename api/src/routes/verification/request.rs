use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cb_core::{CategoryRepository, EmailServiceTrait, VerificationRepository};
use cb_shared::email::mask_email;

use crate::dto::{validation_error, RequestVerificationRequest, RequestVerificationResponse};
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::{get_message, Language};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for POST /school-verification
///
/// Sends a 6-digit code to a school email address.
///
/// # Request Body
///
/// ```json
/// { "email": "student@konkuk.ac.kr", "slug": "konkuk" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "A verification code has been sent to your school email", "success": true }
/// ```
pub async fn request_verification<V, C, E>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<V, C, E>>,
    body: web::Json<RequestVerificationRequest>,
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

    log::info!(
        "Verification requested by user {} for school '{}' ({})",
        auth.user_id,
        body.slug,
        mask_email(&body.email)
    );

    match state
        .verification_service
        .request_verification(auth.user_id, &body.email, &body.slug)
        .await
    {
        Ok(result) => {
            log::info!(
                "Verification code issued: record {} for school {} expires at {}",
                result.record_id,
                result.school_id,
                result.expires_at
            );
            HttpResponse::Ok().json(RequestVerificationResponse {
                message: get_message("verification_code_sent", lang),
                success: true,
            })
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
