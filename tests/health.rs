mod common;

use actix_web::{test, web};
use amount_words::registry::ServiceRegistry;
use common::{build_test_app, test_config, with_timeout};

#[actix_web::test]
async fn test_health_check() {
    with_timeout(async {
        let registry = web::Data::new(ServiceRegistry::new(&test_config(10)));
        let app = build_test_app(registry).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, "OK");
    }).await
}
