use actix_web::web::{self, ServiceConfig};

mod api_doc;
pub mod errors;
mod health;
pub mod quests;
pub mod quizzes;

pub use errors::{json_extractor_config, path_extractor_config, ApiError};

pub(crate) fn services(config: &mut ServiceConfig) {
    api_doc::services(config);

    let api_scope = web::scope("/api");
    let api_scope = quests::services(api_scope);
    let api_scope = quizzes::services(api_scope);
    config.service(api_scope);

    health::services(config);
}
