pub mod words;
pub mod normalize;
pub mod presenter;
pub mod registry;
pub mod handlers;
pub mod handlers_v1;
pub mod models;
pub mod config;
pub mod monitor;
pub mod rate_limit;
pub mod errors;

pub use errors::{ServiceError, ErrorResponse};
pub use normalize::{format_money_input, normalize_money_input};
pub use presenter::{legal_amount_text, round_to_cents, title_case, DEFAULT_CURRENCY_SUFFIX};
pub use words::{integer_to_words, number_to_spanish_words, split_amount};

pub async fn health_check() -> actix_web::Result<&'static str> {
    Ok("OK")
}
