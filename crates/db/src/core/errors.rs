use sqlx::Error;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DBError {
    #[error("Unable to connect to DB")]
    UnableToConnect(Error),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(BoxDynError),

    #[error("Unable to migrate: {0}")]
    MigrationError(BoxDynError),

    #[error("Unable to create a quest: {0}")]
    CreateQuestFailed(BoxDynError),

    #[error("Unable to get a quest: {0}")]
    GetQuestFailed(BoxDynError),

    #[error("Unable to get quests: {0}")]
    GetQuestsFailed(BoxDynError),

    #[error("Unable to update a quest: {0}")]
    UpdateQuestFailed(BoxDynError),

    #[error("Unable to delete a quest: {0}")]
    DeleteQuestFailed(BoxDynError),

    #[error("Unable to check if a quest exists: {0}")]
    QuestExistsFailed(BoxDynError),

    #[error("Unable to create a quiz: {0}")]
    CreateQuizFailed(BoxDynError),

    #[error("Unable to get the quizzes of quest {0}: {1}")]
    GetQuizzesByQuestIdFailed(i64, BoxDynError),

    #[error("Row has incorrect data: {0}")]
    RowCorrupted(BoxDynError),

    #[error("Not found")]
    RowNotFound,
}

/// Convenience type alias for grouping driver-specific errors
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Generic result data structure
pub type DBResult<V> = Result<V, DBError>;
