use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use staylet::auth::rate_limit::RateLimiter;
use staylet::config::Config;
use staylet::db;
use staylet::models::store::{PgStore, RentalStore};
use staylet::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // No admin password configured means no server at all.
    let config = Config::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e.to_string())
    })?;

    let pool = db::init_pool(&config).await.map_err(|e| {
        log::error!("Failed to connect to database: {e}");
        std::io::Error::other(e)
    })?;
    db::run_migrations(&pool).await.map_err(|e| {
        log::error!("Failed to run migrations: {e}");
        std::io::Error::other(e)
    })?;

    let store: Arc<dyn RentalStore> = Arc::new(PgStore::new(pool));
    let store = web::Data::from(store);
    let admin = web::Data::new(config.admin.clone());
    let limiter = web::Data::new(RateLimiter::new());
    let secret_key = config.cookie_key();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(admin.clone())
            .app_data(limiter.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
