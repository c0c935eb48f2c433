use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use leave_calendar::database::{PgRecordStore, init_database};
use leave_calendar::{CalendarService, Config, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("Starting leave calendar server...");

    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    let pool = init_database(&config.database_url, config.database_max_connections).await?;

    let service = CalendarService::new(PgRecordStore::new(pool))?;
    if let Err(err) = service.load().await {
        // Serve an empty calendar until /calendar/reload succeeds
        log::warn!("Initial calendar load failed: {}", err);
    }
    let service = web::Data::new(service);

    let server_address = config.server_address();
    let allowed_origin = config.client_base_url.clone();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
                    .max_age(3600),
            )
            .wrap(Logger::new(r#"%a "%r" %s %b "%{User-Agent}i" %T"#))
            .configure(routes::configure::<PgRecordStore>)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
