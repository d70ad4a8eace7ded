use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData};
use actix_web::{http::header::ContentType, put, web, HttpResponse};
use derive_more::Deref;
use englishquiz_db::core::{
    definitions::{Quest, QuestRepository},
    errors::DBError,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::types::{OverwriteQuest, QuestPayload};

#[derive(Serialize, Deserialize, Debug, ToSchema, Deref)]
pub struct UpdateQuestRequest(pub QuestPayload);

/// Update a quest.
///
/// Name and description are overwritten, the ID and the quizzes of the quest are untouched.
#[utoipa::path(
    tag = "quests",
    request_body = UpdateQuestRequest,
    params(
        ("quest_id" = i64, Path, description = "Quest ID")
    ),
    responses(
        (status = 200, description = "Quest updated", body = String),
        (status = 400, description = "Quest name cannot be empty"),
        (status = 404, description = "Quest not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
#[put("/quests/{quest_id}")]
pub async fn update_quest(
    data: QuestsData,
    quest_id: web::Path<i64>,
    quest_update: web::Json<UpdateQuestRequest>,
) -> HttpResponse {
    let db = data.into_inner();

    match update_quest_controller(db, quest_id.into_inner(), &quest_update).await {
        Ok(_) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body("Quest updated"),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn update_quest_controller<DB: QuestRepository + ?Sized>(
    db: Arc<DB>,
    id: i64,
    quest_update: &QuestPayload,
) -> Result<Quest, ApiError> {
    let Some(stored_quest) = db.find_by_id(id).await? else {
        log::warn!("Attempted to update non-existent quest ID: {id}");
        return Err(ApiError::NotFound(None));
    };

    let quest = quest_update.overwrite(stored_quest).map_err(|error| {
        log::warn!("Rejected update of quest ID {id}: {error}");
        error
    })?;

    match db.update(&quest).await {
        Ok(()) => {
            log::info!("Quest updated: {}", quest.quest_name);
            Ok(quest)
        }
        // removed between the lookup and the update
        Err(DBError::RowNotFound) => {
            log::warn!("Attempted to update non-existent quest ID: {id}");
            Err(ApiError::NotFound(None))
        }
        Err(error) => Err(error.into()),
    }
}
