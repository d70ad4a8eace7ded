use crate::api::QuestsData;
use actix_web::{get, web::ServiceConfig, HttpResponse};
use englishquiz_db::core::definitions::QuestRepository;

#[utoipa::path(
    responses(
        (status = 200, description = "Service is live")
    )
)]
#[get("/health/live")]
async fn live() -> HttpResponse {
    HttpResponse::Ok().json("alive")
}

#[utoipa::path(
    responses(
        (status = 200, description = "Service can reach the database"),
        (status = 503, description = "Database is unreachable")
    )
)]
#[get("/health/ready")]
async fn ready(quests: QuestsData) -> HttpResponse {
    if quests.ping().await {
        HttpResponse::Ok().json("ready")
    } else {
        log::warn!("Readiness check failed: database ping unsuccessful");
        HttpResponse::ServiceUnavailable().finish()
    }
}

pub fn services(config: &mut ServiceConfig) {
    config.service(live).service(ready);
}
