use actix_web::Scope;

pub mod create_quest;
pub mod delete_quest;
pub mod get_quest;
pub mod get_quests;
pub mod types;
pub mod update_quest;

pub use create_quest::*;
pub use delete_quest::*;
pub use get_quest::*;
pub use get_quests::*;
pub use update_quest::*;

pub fn services(api_scope: Scope) -> Scope {
    api_scope
        .service(get_quests)
        .service(create_quest)
        .service(get_quest)
        .service(update_quest)
        .service(delete_quest)
}
