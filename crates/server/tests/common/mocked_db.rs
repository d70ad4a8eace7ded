use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;
use englishquiz_db::core::{
    definitions::{NewQuest, NewQuiz, Quest, QuestRepository, Quiz, QuizRepository},
    errors::{DBError, DBResult},
};

#[derive(Default)]
struct State {
    quests: BTreeMap<i64, Quest>,
    quizzes: BTreeMap<i64, Quiz>,
    last_quest_id: i64,
    last_quiz_id: i64,
}

/// In-memory stand in for the Postgres repositories, with the same cascade on delete
#[derive(Default)]
pub struct MockedDatabase {
    state: Mutex<State>,
}

impl MockedDatabase {
    pub fn quest_count(&self) -> usize {
        self.state.lock().unwrap().quests.len()
    }

    pub fn quiz_count(&self) -> usize {
        self.state.lock().unwrap().quizzes.len()
    }
}

#[async_trait]
impl QuestRepository for MockedDatabase {
    async fn ping(&self) -> bool {
        true
    }

    async fn find_all(&self) -> DBResult<Vec<Quest>> {
        Ok(self.state.lock().unwrap().quests.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> DBResult<Option<Quest>> {
        Ok(self.state.lock().unwrap().quests.get(&id).cloned())
    }

    async fn save(&self, quest: &NewQuest<'_>) -> DBResult<Quest> {
        let mut state = self.state.lock().unwrap();
        state.last_quest_id += 1;
        let stored_quest = Quest {
            id: state.last_quest_id,
            quest_name: quest.quest_name.to_string(),
            description: quest.description.to_string(),
        };
        state.quests.insert(stored_quest.id, stored_quest.clone());

        Ok(stored_quest)
    }

    async fn update(&self, quest: &Quest) -> DBResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.quests.get_mut(&quest.id) {
            Some(stored_quest) => {
                *stored_quest = quest.clone();
                Ok(())
            }
            None => Err(DBError::RowNotFound),
        }
    }

    async fn exists_by_id(&self, id: i64) -> DBResult<bool> {
        Ok(self.state.lock().unwrap().quests.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> DBResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.quests.remove(&id).is_none() {
            return Err(DBError::RowNotFound);
        }
        state.quizzes.retain(|_, quiz| quiz.quest_id != id);

        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MockedDatabase {
    async fn save(&self, quiz: &NewQuiz<'_>) -> DBResult<Quiz> {
        let mut state = self.state.lock().unwrap();
        if !state.quests.contains_key(&quiz.quest_id) {
            return Err(DBError::CreateQuizFailed(
                "quizzes_quest_id_fkey violated".into(),
            ));
        }
        state.last_quiz_id += 1;
        let stored_quiz = Quiz {
            id: state.last_quiz_id,
            title: quiz.title.to_string(),
            quest_id: quiz.quest_id,
        };
        state.quizzes.insert(stored_quiz.id, stored_quiz.clone());

        Ok(stored_quiz)
    }

    async fn find_by_quest_id(&self, quest_id: i64) -> DBResult<Vec<Quiz>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .quizzes
            .values()
            .filter(|quiz| quiz.quest_id == quest_id)
            .cloned()
            .collect())
    }
}

/// Repository whose every call fails like an unreachable database would
pub struct BrokenDatabase;

fn connection_lost() -> DBError {
    DBError::GetQuestsFailed("connection reset by peer".into())
}

#[async_trait]
impl QuestRepository for BrokenDatabase {
    async fn ping(&self) -> bool {
        false
    }

    async fn find_all(&self) -> DBResult<Vec<Quest>> {
        Err(connection_lost())
    }

    async fn find_by_id(&self, _id: i64) -> DBResult<Option<Quest>> {
        Err(connection_lost())
    }

    async fn save(&self, _quest: &NewQuest<'_>) -> DBResult<Quest> {
        Err(connection_lost())
    }

    async fn update(&self, _quest: &Quest) -> DBResult<()> {
        Err(connection_lost())
    }

    async fn exists_by_id(&self, _id: i64) -> DBResult<bool> {
        Err(connection_lost())
    }

    async fn delete_by_id(&self, _id: i64) -> DBResult<()> {
        Err(connection_lost())
    }
}

#[async_trait]
impl QuizRepository for BrokenDatabase {
    async fn save(&self, _quiz: &NewQuiz<'_>) -> DBResult<Quiz> {
        Err(connection_lost())
    }

    async fn find_by_quest_id(&self, _quest_id: i64) -> DBResult<Vec<Quiz>> {
        Err(connection_lost())
    }
}

/// Quests are served from memory, while every quiz call fails
#[derive(Default)]
pub struct BrokenQuizzesDatabase {
    pub quests: MockedDatabase,
}

fn quizzes_unwritable() -> DBError {
    DBError::CreateQuizFailed("disk full".into())
}

#[async_trait]
impl QuestRepository for BrokenQuizzesDatabase {
    async fn ping(&self) -> bool {
        self.quests.ping().await
    }

    async fn find_all(&self) -> DBResult<Vec<Quest>> {
        self.quests.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> DBResult<Option<Quest>> {
        self.quests.find_by_id(id).await
    }

    async fn save(&self, quest: &NewQuest<'_>) -> DBResult<Quest> {
        QuestRepository::save(&self.quests, quest).await
    }

    async fn update(&self, quest: &Quest) -> DBResult<()> {
        self.quests.update(quest).await
    }

    async fn exists_by_id(&self, id: i64) -> DBResult<bool> {
        self.quests.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64) -> DBResult<()> {
        self.quests.delete_by_id(id).await
    }
}

#[async_trait]
impl QuizRepository for BrokenQuizzesDatabase {
    async fn save(&self, _quiz: &NewQuiz<'_>) -> DBResult<Quiz> {
        Err(quizzes_unwritable())
    }

    async fn find_by_quest_id(&self, _quest_id: i64) -> DBResult<Vec<Quiz>> {
        Err(quizzes_unwritable())
    }
}
