pub mod middlewares;
pub mod routes;

use self::routes::{json_extractor_config, path_extractor_config};
use crate::configuration::Config;
use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{Server, ServiceFactory},
    web::Data,
    App, HttpServer,
};
use englishquiz_db::core::definitions::{QuestRepository, QuizRepository};
use tracing_actix_web::TracingLogger;

/// Quest repository handle shared by every worker
pub type QuestsData = Data<dyn QuestRepository>;
/// Quiz repository handle shared by every worker
pub type QuizzesData = Data<dyn QuizRepository>;

pub fn run_server(
    config: &Config,
    quests: QuestsData,
    quizzes: QuizzesData,
) -> Result<Server, std::io::Error> {
    let server_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || get_app_router(&quests, &quizzes))
        .bind(&server_address)?
        .run();

    log::info!("English Quiz REST API running at http://{}", server_address);

    Ok(server)
}

/// Builds the application with its repositories injected as shared app data
pub fn get_app_router(
    quests: &QuestsData,
    quizzes: &QuizzesData,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(json_extractor_config())
        .app_data(path_extractor_config())
        .app_data(quests.clone())
        .app_data(quizzes.clone())
        .wrap(Cors::permissive())
        .wrap(TracingLogger::default())
        .configure(routes::services)
}
