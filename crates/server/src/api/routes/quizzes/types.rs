use englishquiz_db::core::definitions::NewQuiz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted when adding a quiz to a quest. The owner always comes from the path.
#[derive(Deserialize, Serialize, Debug, Default, Clone, ToSchema)]
pub struct QuizPayload {
    pub title: Option<String>,
}

pub trait ToNewQuiz {
    fn to_new_quiz(&self, quest_id: i64) -> NewQuiz<'_>;
}

impl ToNewQuiz for QuizPayload {
    fn to_new_quiz(&self, quest_id: i64) -> NewQuiz<'_> {
        NewQuiz {
            title: self.title.as_deref().unwrap_or_default(),
            quest_id,
        }
    }
}
