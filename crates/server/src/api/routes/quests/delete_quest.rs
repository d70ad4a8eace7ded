use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData};
use actix_web::{delete, web, HttpResponse};
use englishquiz_db::core::{definitions::QuestRepository, errors::DBError};

/// Delete a quest
///
/// The quizzes owned by the quest are deleted with it.
#[utoipa::path(
    tag = "quests",
    params(
        ("quest_id" = i64, Path, description = "ID of the quest to delete")
    ),
    responses(
        (status = 204, description = "Quest deleted"),
        (status = 404, description = "Quest not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
#[delete("/quests/{quest_id}")]
pub async fn delete_quest(
    data: QuestsData,
    quest_id: web::Path<i64>,
) -> HttpResponse {
    let db = data.into_inner();

    match delete_quest_controller(db, quest_id.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn delete_quest_controller<DB: QuestRepository + ?Sized>(
    db: Arc<DB>,
    id: i64,
) -> Result<(), ApiError> {
    if !db.exists_by_id(id).await? {
        log::warn!("Attempted to delete non-existent quest ID: {id}");
        return Err(ApiError::NotFound(None));
    }

    match db.delete_by_id(id).await {
        Ok(()) => {
            log::info!("Quest deleted with ID: {id}");
            Ok(())
        }
        Err(DBError::RowNotFound) => {
            log::warn!("Attempted to delete non-existent quest ID: {id}");
            Err(ApiError::NotFound(None))
        }
        Err(error) => Err(error.into()),
    }
}
