use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;
use user_service::config::{ApiInfo, EnvConfig};
use user_service::db::sqlite_service::SqliteService;
use user_service::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let sqlite_service = SqliteService::new(&config.db_url)
        .await
        .map_err(std::io::Error::other)?;
    let sqlite_service = web::Data::new(sqlite_service);

    info!("{} v{}: {}", ApiInfo::TITLE, ApiInfo::VERSION, ApiInfo::DESCRIPTION);
    info!("Starting server on {}", addr);
    info!("API documentation at http://{}{}/", addr, ApiInfo::DOCS_PATH);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(sqlite_service.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
