pub mod create_quiz;
pub mod get_quizzes;
pub mod types;

use actix_web::Scope;
pub use create_quiz::*;
pub use get_quizzes::*;

pub fn services(api_scope: Scope) -> Scope {
    api_scope.service(get_quizzes).service(create_quiz)
}
