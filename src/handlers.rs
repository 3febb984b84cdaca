//! src/handlers.rs
//! Handles simple amount-in-words requests

use crate::{
    errors::ServiceError,
    models::{SimpleWordsResponse, Validate, WordsRequest},
    presenter::round_to_cents,
    words::number_to_spanish_words,
};
use actix_web::{web, HttpResponse};
use log::{debug, info};

pub async fn amount_in_words(
    request: web::Json<WordsRequest>,
) -> Result<HttpResponse, ServiceError> {
    debug!("Processing simple words request: {:?}", request);

    let amount = validated_amount(&request)?;
    let words = number_to_spanish_words(amount);
    if words.is_empty() {
        debug!("Amount {} could not be written in words", amount);
        return Err(ServiceError::AmountNotRepresentable(amount.to_string()));
    }

    info!("Formatted {} as {:?}", amount, words);

    Ok(HttpResponse::Ok().json(SimpleWordsResponse {
        amount: round_to_cents(amount),
        words,
    }))
}

/// Validates the request and returns the amount it carries.
pub(crate) fn validated_amount(request: &WordsRequest) -> Result<f64, ServiceError> {
    request.validate().map_err(|e| {
        debug!("Validation error: {}", e);
        ServiceError::InvalidAmount(e)
    })?;
    request.resolved_amount().map_err(ServiceError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use actix_web::{test, App};
    use serde_json::json;

    fn setup() {
        env_logger::builder().is_test(true).try_init().ok();
    }

    macro_rules! simple_app {
        () => {
            test::init_service(
                App::new().service(web::resource("/words").route(web::post().to(amount_in_words))),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_simple_words() {
        setup();
        let app = simple_app!();

        let req = test::TestRequest::post()
            .uri("/words")
            .set_json(json!({ "amount": 1_234_567.0 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: SimpleWordsResponse = test::read_body_json(resp).await;
        assert_eq!(body.amount, 1_234_567.0);
        assert_eq!(
            body.words,
            "un millón doscientos treinta y cuatro mil quinientos sesenta y siete"
        );
    }

    #[actix_web::test]
    async fn test_raw_amount_is_normalized() {
        setup();
        let app = simple_app!();

        let req = test::TestRequest::post()
            .uri("/words")
            .set_json(json!({ "raw_amount": "2.000.000" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: SimpleWordsResponse = test::read_body_json(resp).await;
        assert_eq!(body.words, "dos millones");
    }

    #[actix_web::test]
    async fn test_validation_errors() {
        setup();
        let app = simple_app!();

        let test_cases = vec![
            (json!({}), "Amount is required"),
            (json!({ "amount": -1.0 }), "Amount cannot be negative"),
            (json!({ "raw_amount": "n/a" }), "Could not read an amount"),
        ];

        for (payload, expected_error) in test_cases {
            let req = test::TestRequest::post()
                .uri("/words")
                .set_json(payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 400);

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.code, "INVALID_AMOUNT");
            assert!(body.error.contains(expected_error));
        }
    }

    #[actix_web::test]
    async fn test_huge_amount_still_formats() {
        setup();
        let app = simple_app!();

        let req = test::TestRequest::post()
            .uri("/words")
            .set_json(json!({ "amount": 1e300 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: SimpleWordsResponse = test::read_body_json(resp).await;
        assert!(!body.words.is_empty());
        assert!(body.words.contains("millones"));
    }
}
