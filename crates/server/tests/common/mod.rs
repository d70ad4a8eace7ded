#![allow(dead_code)]

pub mod mocked_db;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::web::Data;
use actix_web::App;
use englishquiz_db::core::definitions::{NewQuest, Quest, QuestRepository, QuizRepository};
use englishquiz_server::api::{get_app_router, QuestsData, QuizzesData};

pub use mocked_db::{BrokenDatabase, BrokenQuizzesDatabase, MockedDatabase};

pub fn build_app<DB>(
    db: &Arc<DB>,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    DB: QuestRepository + QuizRepository + 'static,
{
    let quests: QuestsData = Data::from(db.clone() as Arc<dyn QuestRepository>);
    let quizzes: QuizzesData = Data::from(db.clone() as Arc<dyn QuizRepository>);

    get_app_router(&quests, &quizzes)
}

pub async fn create_sample_quest(db: &MockedDatabase, name: &str, description: &str) -> Quest {
    QuestRepository::save(
        db,
        &NewQuest {
            quest_name: name,
            description,
        },
    )
    .await
    .unwrap()
}
