use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use cb_api::{
    app::create_app,
    config::load_config,
    routes::{health::DatabaseHealth, AppState},
};
use cb_core::{
    AccessGate, AccessService, CodeHasher, ExpirySweepConfig, ExpirySweepService,
    SchoolVerificationService, VerificationServiceConfig,
};
use cb_infra::database::{DatabasePool, MySqlCategoryRepository, MySqlVerificationRepository};
use cb_infra::email::{create_email_service, EmailServiceAdapter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = load_config().context("Failed to load configuration")?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting CampusBoard API Server ({})", config.environment);

    config.validate().context("Invalid configuration")?;

    let db_pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    db_pool.run_migrations().await.context("Failed to run migrations")?;

    let verification_repo = Arc::new(MySqlVerificationRepository::new(db_pool.get_pool().clone()));
    let category_repo = Arc::new(MySqlCategoryRepository::new(db_pool.get_pool().clone()));

    let email_provider = create_email_service(&config.email, config.environment)
        .context("Failed to initialize the email provider")?;
    let email_service = Arc::new(EmailServiceAdapter::new(
        email_provider,
        config.verification.code_expiration_minutes,
    ));
    info!("Email provider: {}", email_service.provider_name());

    let verification_service = Arc::new(SchoolVerificationService::new(
        verification_repo.clone(),
        category_repo.clone(),
        email_service,
        CodeHasher::new(config.verification.secret.clone()),
        VerificationServiceConfig::from(&config.verification),
    ));

    let access_service = Arc::new(AccessService::new(
        verification_repo.clone(),
        category_repo,
        AccessGate::new(config.verification.school_boards_parent_id),
    ));

    Arc::new(ExpirySweepService::new(
        verification_repo,
        ExpirySweepConfig::from(&config.verification),
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState {
        verification_service,
        access_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let database_health: Arc<dyn DatabaseHealth> = Arc::new(db_pool.clone());
    let database_health = web::Data::from(database_health);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &app_config).app_data(database_health.clone())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    db_pool.close().await;
    Ok(())
}
