use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData};
use actix_web::{get, web, HttpResponse};
use englishquiz_db::core::definitions::{Quest, QuestRepository};

/// Get a quest.
#[utoipa::path(
    tag = "quests",
    params(
        ("quest_id" = i64, Path, description = "Quest ID")
    ),
    responses(
        (status = 200, description = "Quest", body = Quest),
        (status = 404, description = "Quest not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
#[get("/quests/{quest_id}")]
pub async fn get_quest(
    data: QuestsData,
    quest_id: web::Path<i64>,
) -> HttpResponse {
    let db = data.into_inner();

    match get_quest_controller(db, quest_id.into_inner()).await {
        Ok(quest) => HttpResponse::Ok().json(quest),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn get_quest_controller<DB: QuestRepository + ?Sized>(
    db: Arc<DB>,
    id: i64,
) -> Result<Quest, ApiError> {
    match db.find_by_id(id).await? {
        Some(quest) => {
            log::info!("Quest found: {}", quest.quest_name);
            Ok(quest)
        }
        None => {
            log::warn!("Quest not found with ID {id}");
            Err(ApiError::NotFound(None))
        }
    }
}
