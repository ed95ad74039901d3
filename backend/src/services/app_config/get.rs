use actix_web::{web, HttpResponse, Responder};
use common::model::config::AppConfig;

/// Actix web handler for `GET /app-config`.
pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
