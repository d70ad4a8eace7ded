use actix_web::{
    error::JsonPayloadError,
    http::{header::ContentType, StatusCode},
    web, HttpResponse, ResponseError,
};
use englishquiz_db::core::errors::DBError;
use thiserror::Error;

/// Every failure a request can end with. All of them are terminal for the request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field is missing or blank
    #[error("{0}")]
    Validation(String),
    #[error("{}", .0.as_deref().unwrap_or_default())]
    NotFound(Option<String>),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(None) => response.finish(),
            _ => response
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
        }
    }
}

/// Extraction failures (malformed JSON, wrong content type, non numeric ID...) end in the catch-all
fn extraction_failed(err: impl std::fmt::Display) -> actix_web::Error {
    log::error!("An error occurred: {err}");
    ApiError::Internal(err.to_string()).into()
}

pub fn json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| match err {
        JsonPayloadError::Deserialize(des_err) => extraction_failed(des_err),
        _ => extraction_failed(err),
    })
}

pub fn path_extractor_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _| extraction_failed(err))
}

impl From<DBError> for ApiError {
    fn from(error: DBError) -> Self {
        log::error!("An error occurred: {error}");
        ApiError::Internal(error.to_string())
    }
}
