pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::address;
pub use modules::auth;
pub use modules::email;

use crate::address::adapter::outgoing::address_query_postgres::AddressQueryPostgres;
use crate::address::adapter::outgoing::address_repository_postgres::AddressRepositoryPostgres;
use crate::address::application::orchestrator::address_export::AddressExportOrchestrator;
use crate::address::application::services::{
    CreateAddressService, DeleteAddressService, ExportAddressesService, ListAddressesService,
    UpdateAddressService,
};
use crate::address::application::AddressUseCases;
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::password::StrongPasswordPolicy;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::AppConfig;

use actix_web::dev::Service;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub address: AddressUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;

    Migrator::up(&conn, None).await.map_err(io::Error::other)?;
    info!("Migrations applied");

    let db_arc = Arc::new(conn);

    // Shared adapters
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::default());
    let email_sender: Arc<dyn EmailSender + Send + Sync> =
        Arc::new(SmtpEmailSender::from_config(&config.smtp).map_err(io::Error::other)?);

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        Arc::new(StrongPasswordPolicy::default()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        password_hasher,
        jwt_service.clone() as Arc<dyn TokenProvider>,
    );

    // Address
    let address_query = AddressQueryPostgres::new(Arc::clone(&db_arc));
    let address_repo = AddressRepositoryPostgres::new(Arc::clone(&db_arc));

    let export_use_case = Arc::new(ExportAddressesService::new(address_query.clone()));

    let address = AddressUseCases {
        create: Arc::new(CreateAddressService::new(address_repo.clone())),
        list: Arc::new(ListAddressesService::new(address_query)),
        update: Arc::new(UpdateAddressService::new(address_repo.clone())),
        delete: Arc::new(DeleteAddressService::new(address_repo)),
        export: Arc::new(AddressExportOrchestrator::new(export_use_case, email_sender)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        address,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let method = req.method().to_string();
                let path = req.path().to_string();
                let started = Instant::now();
                let fut = srv.call(req);
                async move {
                    let res = fut.await?;
                    info!(
                        method = %method,
                        path = %path,
                        status = res.status().as_u16(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Request handled"
                    );
                    Ok(res)
                }
            })
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Address
    cfg.configure(crate::address::adapter::incoming::web::routes::configure);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
