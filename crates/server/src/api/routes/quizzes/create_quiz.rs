use std::sync::Arc;

use crate::{
    api::{routes::errors::ApiError, QuestsData, QuizzesData},
    domain::quests::QUEST_NOT_FOUND,
};
use actix_web::{http::header::ContentType, post, web, HttpResponse};
use derive_more::Deref;
use englishquiz_db::core::definitions::{QuestRepository, Quiz, QuizRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::types::{QuizPayload, ToNewQuiz};

#[derive(Deserialize, Serialize, Debug, ToSchema, Deref)]
pub struct CreateQuizRequest(pub QuizPayload);

/// Add a quiz to a quest.
#[utoipa::path(
    tag = "quizzes",
    request_body = CreateQuizRequest,
    params(
        ("quest_id" = i64, Path, description = "ID of the owning quest")
    ),
    responses(
        (status = 201, description = "Quiz saved successfully", body = String),
        (status = 404, description = "Quest not found", body = String),
        (status = 500, description = "Internal Server Error")
    )
)]
#[post("/quests/{quest_id}/quiz")]
pub async fn create_quiz(
    quests: QuestsData,
    quizzes: QuizzesData,
    quest_id: web::Path<i64>,
    quiz: web::Json<CreateQuizRequest>,
) -> HttpResponse {
    match create_quiz_controller(
        quests.into_inner(),
        quizzes.into_inner(),
        quest_id.into_inner(),
        &quiz,
    )
    .await
    {
        Ok(_) => HttpResponse::Created()
            .content_type(ContentType::plaintext())
            .body("Quiz saved successfully"),
        Err(error) => HttpResponse::from_error(error),
    }
}

async fn create_quiz_controller<Quests, Quizzes>(
    quests: Arc<Quests>,
    quizzes: Arc<Quizzes>,
    quest_id: i64,
    quiz: &QuizPayload,
) -> Result<Quiz, ApiError>
where
    Quests: QuestRepository + ?Sized,
    Quizzes: QuizRepository + ?Sized,
{
    let Some(quest) = quests.find_by_id(quest_id).await? else {
        log::warn!("Quest not found for adding quiz: ID {quest_id}");
        return Err(ApiError::NotFound(Some(QUEST_NOT_FOUND.to_string())));
    };

    let quiz = quizzes.save(&quiz.to_new_quiz(quest.id)).await?;
    log::info!("New quiz added to quest ID {}: {}", quest_id, quiz.title);

    Ok(quiz)
}
