use std::sync::Arc;

use actix_web::web::Data;
use api::{QuestsData, QuizzesData};
use configuration::Config;
use englishquiz_db::{
    core::definitions::{QuestRepository, QuizRepository},
    create_db_component,
};
use tokio::{select, signal};

pub mod api;
pub mod configuration;
pub mod domain;

pub async fn run_app() {
    let config = Config::new().expect("Unable to build up the config");

    if let Err(error) = api::middlewares::initialize_telemetry() {
        eprintln!("> run_app > Unable to initialize telemetry: {error}");
    }

    log::debug!("Configuration: {config:?}");

    let database = create_db_component(&config.database_url, config.run_migrations)
        .await
        .expect("unable to connect to the database or to run the migrations");
    let database = Arc::new(database);

    // Both repositories are served by the same pool
    let quests: QuestsData = Data::from(database.clone() as Arc<dyn QuestRepository>);
    let quizzes: QuizzesData = Data::from(database as Arc<dyn QuizRepository>);

    let server = api::run_server(&config, quests, quizzes).expect("unable to bind the HTTP server");

    select! {
        result = server => {
            if let Err(e) = result {
                log::error!("> run_app > HTTP server failed due {e:?}");
            }
        },
        _ = signal::ctrl_c() => {
            log::info!("> run_app > SIGINT catched. Exiting...");
        }
    }
}
