pub mod calendar;
pub mod holidays;
pub mod leaves;
pub mod notes;
pub mod quotas;
pub mod shared;

use actix_web::{HttpResponse, Responder, get};

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}
