use std::sync::Arc;

use crate::api::{routes::errors::ApiError, QuestsData, QuizzesData};
use actix_web::{get, web, HttpResponse};
use englishquiz_db::core::definitions::{QuestRepository, Quiz, QuizRepository};

/// Get the quizzes of a quest.
///
/// A quest without quizzes returns an empty list.
#[utoipa::path(
    tag = "quizzes",
    params(
        ("quest_id" = i64, Path, description = "ID of the owning quest")
    ),
    responses(
        (status = 200, description = "Quizzes owned by the quest", body = [Quiz]),
        (status = 404, description = "Quest not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
#[get("/quests/{quest_id}/quiz")]
pub async fn get_quizzes(
    quests: QuestsData,
    quizzes: QuizzesData,
    quest_id: web::Path<i64>,
) -> HttpResponse {
    match get_quizzes_controller(quests.into_inner(), quizzes.into_inner(), quest_id.into_inner())
        .await
    {
        Ok(quizzes) => HttpResponse::Ok().json(quizzes),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn get_quizzes_controller<Quests, Quizzes>(
    quests: Arc<Quests>,
    quizzes: Arc<Quizzes>,
    quest_id: i64,
) -> Result<Vec<Quiz>, ApiError>
where
    Quests: QuestRepository + ?Sized,
    Quizzes: QuizRepository + ?Sized,
{
    if !quests.exists_by_id(quest_id).await? {
        log::warn!("Quest not found for quiz listing: ID {quest_id}");
        return Err(ApiError::NotFound(None));
    }

    let quizzes = quizzes.find_by_quest_id(quest_id).await?;
    log::info!(
        "Fetched {} quizzes for quest ID {}",
        quizzes.len(),
        quest_id
    );

    Ok(quizzes)
}
