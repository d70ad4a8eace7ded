pub mod core;

use std::str::FromStr;

use crate::core::{
    definitions::{NewQuest, NewQuiz, Quest, QuestRepository, Quiz, QuizRepository},
    errors::{DBError, DBResult},
    ops::{Connect, GetConnection, Migrate},
};
use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres,
};

pub use sqlx::Executor;

pub struct DatabaseOptions {
    url: String,
    pub pool_options: PgPoolOptions,
}

impl DatabaseOptions {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            pool_options: PgPoolOptions::new(),
        }
    }
}

#[async_trait::async_trait]
impl Connect for DatabaseOptions {
    type Pool = Database;

    async fn connect(self) -> DBResult<Self::Pool> {
        let pg_options = PgConnectOptions::from_str(&self.url)
            .map_err(|err| DBError::InvalidUrl(Box::new(err)))?;
        let pool = self
            .pool_options
            .connect_with(pg_options)
            .await
            .map_err(DBError::UnableToConnect)?;

        Ok(Database::new(pool))
    }
}

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GetConnection for Database {
    type Conn = PoolConnection<Postgres>;

    async fn get_conn(&self) -> DBResult<Self::Conn> {
        self.pool.acquire().await.map_err(DBError::UnableToConnect)
    }
}

#[async_trait::async_trait]
impl QuestRepository for Database {
    async fn ping(&self) -> bool {
        use sqlx::Connection;

        if let Ok(mut con) = self.pool.acquire().await {
            con.ping().await.is_ok()
        } else {
            false
        }
    }

    async fn find_all(&self) -> DBResult<Vec<Quest>> {
        let query_result = sqlx::query("SELECT * FROM quests ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| DBError::GetQuestsFailed(Box::new(err)))?;

        // not using functional methods due to "question mark"
        let mut quests = vec![];
        for row in query_result {
            quests.push(Quest::try_from(row)?);
        }

        Ok(quests)
    }

    async fn find_by_id(&self, id: i64) -> DBResult<Option<Quest>> {
        let query_result = sqlx::query("SELECT * FROM quests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| DBError::GetQuestFailed(Box::new(err)))?;

        query_result.map(Quest::try_from).transpose()
    }

    async fn save(&self, quest: &NewQuest<'_>) -> DBResult<Quest> {
        let row = sqlx::query(
            "INSERT INTO quests (quest_name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(quest.quest_name)
        .bind(quest.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| DBError::CreateQuestFailed(Box::new(err)))?;

        Quest::try_from(row)
    }

    async fn update(&self, quest: &Quest) -> DBResult<()> {
        let result =
            sqlx::query("UPDATE quests SET quest_name = $1, description = $2 WHERE id = $3")
                .bind(&quest.quest_name)
                .bind(&quest.description)
                .bind(quest.id)
                .execute(&self.pool)
                .await
                .map_err(|err| DBError::UpdateQuestFailed(Box::new(err)))?;

        if result.rows_affected() == 0 {
            return Err(DBError::RowNotFound);
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> DBResult<bool> {
        let quest_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM quests WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|err| DBError::QuestExistsFailed(Box::new(err)))?;

        Ok(quest_exists)
    }

    async fn delete_by_id(&self, id: i64) -> DBResult<()> {
        // quizzes go away through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM quests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| DBError::DeleteQuestFailed(Box::new(err)))?;

        if result.rows_affected() == 0 {
            return Err(DBError::RowNotFound);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl QuizRepository for Database {
    async fn save(&self, quiz: &NewQuiz<'_>) -> DBResult<Quiz> {
        let row = sqlx::query("INSERT INTO quizzes (title, quest_id) VALUES ($1, $2) RETURNING *")
            .bind(quiz.title)
            .bind(quiz.quest_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| DBError::CreateQuizFailed(Box::new(err)))?;

        Quiz::try_from(row)
    }

    async fn find_by_quest_id(&self, quest_id: i64) -> DBResult<Vec<Quiz>> {
        let query_result = sqlx::query("SELECT * FROM quizzes WHERE quest_id = $1 ORDER BY id ASC")
            .bind(quest_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| DBError::GetQuizzesByQuestIdFailed(quest_id, Box::new(err)))?;

        let mut quizzes = vec![];
        for row in query_result {
            quizzes.push(Quiz::try_from(row)?);
        }

        Ok(quizzes)
    }
}

#[async_trait::async_trait]
impl Migrate for Database {
    async fn migrate(&self) -> DBResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|err| DBError::MigrationError(Box::new(err)))
    }
}

pub async fn create_db_component(db_url: &str, run_migrations: bool) -> DBResult<Database> {
    let mut db_options = DatabaseOptions::new(db_url);
    db_options.pool_options = db_options
        .pool_options
        .min_connections(5)
        .max_connections(10);

    let db = db_options.connect().await?;

    if run_migrations {
        db.migrate().await?;
    }

    Ok(db)
}
