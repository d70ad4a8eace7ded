use super::errors::{DBError, DBResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};
use utoipa::ToSchema;

#[async_trait]
pub trait QuestRepository: Send + Sync {
    async fn ping(&self) -> bool;

    async fn find_all(&self) -> DBResult<Vec<Quest>>;
    async fn find_by_id(&self, id: i64) -> DBResult<Option<Quest>>;
    async fn save(&self, quest: &NewQuest<'_>) -> DBResult<Quest>;
    /// Overwrites name and description of an already stored quest
    async fn update(&self, quest: &Quest) -> DBResult<()>;
    async fn exists_by_id(&self, id: i64) -> DBResult<bool>;
    /// Deleting a quest also deletes every quiz it owns
    async fn delete_by_id(&self, id: i64) -> DBResult<()>;
}

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn save(&self, quiz: &NewQuiz<'_>) -> DBResult<Quiz>;
    async fn find_by_quest_id(&self, quest_id: i64) -> DBResult<Vec<Quiz>>;
}

#[derive(Default, PartialEq, Eq, Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: i64,
    pub quest_name: String,
    pub description: String,
}

impl TryFrom<PgRow> for Quest {
    type Error = DBError;
    fn try_from(value: PgRow) -> Result<Self, Self::Error> {
        Ok(Quest {
            id: value
                .try_get("id")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            quest_name: value
                .try_get("quest_name")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            description: value
                .try_get("description")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
        })
    }
}

#[derive(Default, PartialEq, Eq, Serialize, Deserialize, Clone, Debug)]
pub struct NewQuest<'a> {
    pub quest_name: &'a str,
    pub description: &'a str,
}

#[derive(Default, PartialEq, Eq, Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub quest_id: i64,
}

impl TryFrom<PgRow> for Quiz {
    type Error = DBError;
    fn try_from(value: PgRow) -> Result<Self, Self::Error> {
        Ok(Quiz {
            id: value
                .try_get("id")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            title: value
                .try_get("title")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            quest_id: value
                .try_get("quest_id")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
        })
    }
}

#[derive(Default, PartialEq, Eq, Serialize, Deserialize, Clone, Debug)]
pub struct NewQuiz<'a> {
    pub title: &'a str,
    pub quest_id: i64,
}
