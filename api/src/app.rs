//! Application factory
//!
//! Builds the Actix-web application from the shared state and configuration.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse,
};

use cb_core::{CategoryRepository, EmailServiceTrait, VerificationRepository};
use cb_shared::AppConfig;

use crate::handlers::error::error_response;
use crate::i18n::Language;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{
    boards::board_access,
    health::health_check,
    verification::{confirm_verification, current_verification, request_verification},
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<V, C, E>(
    app_state: web::Data<AppState<V, C, E>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    V: VerificationRepository + 'static,
    C: CategoryRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let require_auth = JwtAuth::new(&config.auth.jwt);
    let optional_auth = JwtAuth::optional(&config.auth.jwt);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, req| {
            log::warn!("Rejected request body: {}", err);
            let response = error_response("bad_request", &[], Language::from_request(req));
            InternalError::from_response(err, response).into()
        });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(create_cors(&config.server, config.environment))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/school-verification")
                .wrap(require_auth.clone())
                .route(web::post().to(request_verification::<V, C, E>))
                .route(web::get().to(current_verification::<V, C, E>)),
        )
        .service(
            web::resource("/verify-code")
                .wrap(require_auth)
                .route(web::post().to(confirm_verification::<V, C, E>)),
        )
        .service(
            web::resource("/boards/{slug}/access")
                .wrap(optional_auth)
                .route(web::get().to(board_access::<V, C, E>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response("not_found", &[], Language::from_request(&req))
}
