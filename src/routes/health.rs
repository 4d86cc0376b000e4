use actix_web::{get, HttpResponse};
use serde_json::json;

#[get("/health")]
pub async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}
