#![allow(dead_code)]

use std::time::Duration;
use tokio::time::timeout;
use actix_web::{test, web, App, dev::ServiceResponse, body::BoxBody};
use amount_words::{config::Config, handlers, handlers_v1, health_check, registry::ServiceRegistry};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("Test timed out after {} seconds", TEST_TIMEOUT.as_secs()))
}

pub fn test_config(requests_per_day: usize) -> Config {
    let mut config = Config::default();
    config.rate_limit_settings.requests_per_day = requests_per_day;
    config
}

pub async fn build_test_app(
    registry: web::Data<ServiceRegistry>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse<BoxBody>,
    Error = actix_web::Error,
> {
    init_logging();

    test::init_service(
        App::new()
            .app_data(registry)
            .service(web::resource("/health").route(web::get().to(health_check)))
            .service(web::resource("/words").route(web::post().to(handlers::amount_in_words)))
            .service(web::scope("/v1").configure(handlers_v1::configure_v1_routes))
    ).await
}
