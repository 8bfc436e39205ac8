use actix_web::{HttpResponse, ResponseError};
use serde_json::error::Error as SerdeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("failed to parse request body: {0}")]
    Json(#[from] SerdeError),

    #[error("{0} parameter required")]
    MissingParam(&'static str),

    #[error("key not found")]
    NotFound,
}

impl ResponseError for NodeError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({ "error": self.to_string() });
        match self {
            NodeError::Json(_) => HttpResponse::BadRequest().json(body),
            NodeError::MissingParam(_) => HttpResponse::BadRequest().json(body),
            NodeError::NotFound => HttpResponse::NotFound().json(body),
        }
    }
}
