use actix_web::{web, App, HttpServer};
use amount_words::{
    config::Config,
    handlers, handlers_v1, health_check,
    registry::ServiceRegistry,
};
use dotenv::dotenv;
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment and logging
    dotenv().ok();
    env_logger::init();

    let config = Config::new().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let bind_address = config.bind_address();
    let workers = config.server_settings.workers;
    let registry = web::Data::new(ServiceRegistry::new(&config));

    info!("Starting amount-words service at http://{}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())

            .service(
                web::resource("/health")
                    .route(web::get().to(health_check))
            )

            .service(
                web::scope("/v1")
                    .configure(handlers_v1::configure_v1_routes)
            )

            // Legacy route (without version prefix)
            .service(
                web::resource("/words")
                    .route(web::post().to(handlers::amount_in_words))
            )
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}
