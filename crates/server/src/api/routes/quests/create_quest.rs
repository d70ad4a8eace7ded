use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData};
use actix_web::{
    http::header::{self, ContentType},
    post, web, HttpResponse,
};
use derive_more::Deref;
use englishquiz_db::core::definitions::{Quest, QuestRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::types::{QuestPayload, ToNewQuest};

#[derive(Deserialize, Serialize, Debug, ToSchema, Deref)]
pub struct CreateQuestRequest(pub QuestPayload);

/// Create a quest.
///
/// The ID assigned by the store is exposed through the `Location` header.
#[utoipa::path(
    tag = "quests",
    request_body = CreateQuestRequest,
    responses(
        (status = 201, description = "Quest created", body = String),
        (status = 400, description = "Quest name cannot be empty"),
        (status = 500, description = "Internal Server Error")
    )
)]
#[post("/quests")]
pub async fn create_quest(
    data: QuestsData,
    quest: web::Json<CreateQuestRequest>,
) -> HttpResponse {
    let db = data.into_inner();

    match create_quest_controller(db, &quest).await {
        Ok(quest) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/quests/{}", quest.id)))
            .content_type(ContentType::plaintext())
            .body("Quest created"),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn create_quest_controller<DB: QuestRepository + ?Sized>(
    db: Arc<DB>,
    quest: &QuestPayload,
) -> Result<Quest, ApiError> {
    let new_quest = quest.to_new_quest().map_err(|error| {
        log::warn!("Rejected quest creation: {error}");
        error
    })?;

    let quest = db.save(&new_quest).await?;
    log::info!("New quest created: {}", quest.quest_name);

    Ok(quest)
}
