use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData};
use actix_web::{get, HttpResponse};
use englishquiz_db::core::definitions::{Quest, QuestRepository};

/// Get quests.
///
/// Returns every stored quest, an empty list when there are none.
#[utoipa::path(
    tag = "quests",
    responses(
        (status = 200, description = "All quests", body = [Quest]),
        (status = 500, description = "Internal Server Error")
    )
)]
#[get("/quests")]
pub async fn get_quests(data: QuestsData) -> HttpResponse {
    let db = data.into_inner();

    match get_quests_controller(db).await {
        Ok(quests) => HttpResponse::Ok().json(quests),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn get_quests_controller<DB: QuestRepository + ?Sized>(
    db: Arc<DB>,
) -> Result<Vec<Quest>, ApiError> {
    let quests = db.find_all().await?;
    log::info!("Fetched {} quests", quests.len());
    Ok(quests)
}
