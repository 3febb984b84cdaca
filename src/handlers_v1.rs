use crate::{
    errors::ServiceError,
    handlers::validated_amount,
    models::*,
    presenter::{legal_amount_text, round_to_cents, title_case},
    registry::ServiceRegistry,
    words::{number_to_spanish_words, split_amount},
};
use actix_web::{web, HttpRequest, HttpResponse, http::header::ContentType};
use log::{debug, error, info};
use chrono::Utc;
use uuid::Uuid;
use std::time::Instant;

pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/words")
            .route("", web::post().to(amount_in_words))
    )
    .service(
        web::resource("/stats")
            .route(web::get().to(usage_stats))
    );
}

pub async fn amount_in_words(
    req: HttpRequest,
    data: web::Json<WordsRequest>,
    registry: web::Data<ServiceRegistry>,
) -> Result<HttpResponse, ServiceError> {
    debug!("Processing v1 words request: {:?}", data);
    let started = Instant::now();
    registry.monitor.record_request().await;

    let client = client_key(&req);
    if !registry.rate_limiter.check_rate_limit(&client).await {
        registry.monitor.record_rate_limited().await;
        return Err(ServiceError::RateLimitExceeded);
    }

    let suffix = data
        .currency_suffix
        .as_deref()
        .unwrap_or_else(|| registry.currency_suffix());

    match build_words_data(&data, suffix) {
        Ok(words_data) => {
            registry.monitor.record_success().await;
            info!("Formatted {} for {}: {}", words_data.amount, client, words_data.legal_text);

            let response = DetailedWordsResponse {
                request_id: Uuid::new_v4().to_string(),
                timestamp: Utc::now(),
                data: words_data,
                meta: ResponseMetadata {
                    response_time_ms: started.elapsed().as_millis() as u64,
                    rate_limit_remaining: Some(
                        registry.rate_limiter.get_remaining_requests(&client).await,
                    ),
                },
            };

            Ok(HttpResponse::Ok()
                .content_type(ContentType::json())
                .json(response))
        }
        Err(e) => {
            registry.monitor.record_error().await;
            error!("Words request failed: {}", e);
            Err(e)
        }
    }
}

pub async fn usage_stats(registry: web::Data<ServiceRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(registry.monitor.get_stats().await)
}

fn build_words_data(request: &WordsRequest, suffix: &str) -> Result<WordsData, ServiceError> {
    let amount = validated_amount(request)?;
    let (integer_part, cents) = split_amount(amount)
        .ok_or_else(|| ServiceError::AmountNotRepresentable(amount.to_string()))?;

    let words = number_to_spanish_words(amount);

    Ok(WordsData {
        amount: round_to_cents(amount),
        integer_part,
        cents,
        title: title_case(&words),
        legal_text: legal_amount_text(amount, suffix),
        words,
    })
}

fn client_key(req: &HttpRequest) -> String {
    let info = req.connection_info();
    info.realip_remote_addr().unwrap_or("unknown").to_string()
}
