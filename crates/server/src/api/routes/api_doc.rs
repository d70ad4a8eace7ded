use super::health;
use super::quests;
use super::quizzes;
use actix_web::web::ServiceConfig;
use englishquiz_db::core::definitions::{Quest, Quiz};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

#[derive(OpenApi)]
#[openapi(
        info(title = "English Quiz API", description = "Quests and the quizzes they group"),
        paths(
                health::live,
                health::ready,
                quests::get_quests,
                quests::get_quest,
                quests::create_quest,
                quests::update_quest,
                quests::delete_quest,
                quizzes::get_quizzes,
                quizzes::create_quiz,
        ),
        components(
                schemas(
                        Quest,
                        Quiz,
                        quests::types::QuestPayload,
                        quests::create_quest::CreateQuestRequest,
                        quests::update_quest::UpdateQuestRequest,
                        quizzes::types::QuizPayload,
                        quizzes::create_quiz::CreateQuizRequest,
                )
        ),
        tags(
            (name = "quests", description = "Quests endpoints."),
            (name = "quizzes", description = "Quizzes endpoints.")
        ),
)]
struct ApiDoc;

pub(crate) fn services(config: &mut ServiceConfig) {
    config.service(Redoc::with_url("/api/docs", ApiDoc::openapi()));
}
