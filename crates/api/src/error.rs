use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FestivoError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("Unauthorized request. Error message: `{0}`")]
    Unauthorized(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl ResponseError for FestivoError {
    fn status_code(&self) -> StatusCode {
        match *self {
            FestivoError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            FestivoError::BadClientData(_) => StatusCode::BAD_REQUEST,
            FestivoError::Conflict(_) => StatusCode::CONFLICT,
            FestivoError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            FestivoError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
