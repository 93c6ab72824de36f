use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_catalog::config::ServerConfig;
use pushkind_catalog::db::{establish_connection_pool, run_migrations};
use pushkind_catalog::repository::DieselRepository;
use pushkind_catalog::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(applied) => log::info!("Database schema synced ({applied} migrations applied)."),
        Err(e) => {
            log::error!("Unable to sync database schema: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "Server is running on http://{}:{}",
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
