use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum MagazineError {
    #[display("Not found error: {_0}")]
    NotFound(String),
    #[display("Internal error: {_0}")]
    InternalError(String),
    #[display("Configuration error: {_0}")]
    ConfigError(String),
}

impl MagazineError {
    /// Generic message handed to callers when a request fails on I/O.
    pub const REQUEST_FAILED: &'static str = "An error occurred while processing your request";
    pub const ARCHIVE_FAILED: &'static str = "An error occurred while retrieving the archive";

    pub fn request_failed() -> Self {
        MagazineError::InternalError(Self::REQUEST_FAILED.to_string())
    }

    pub fn archive_failed() -> Self {
        MagazineError::InternalError(Self::ARCHIVE_FAILED.to_string())
    }

    fn error_code(&self) -> &'static str {
        match self {
            MagazineError::NotFound(_) => "NOT_FOUND_ERROR",
            MagazineError::InternalError(_) => "INTERNAL_ERROR",
            MagazineError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            MagazineError::NotFound(msg)
            | MagazineError::InternalError(msg)
            | MagazineError::ConfigError(msg) => msg,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl std::error::Error for MagazineError {}

impl From<MagazineError> for std::io::Error {
    fn from(err: MagazineError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    }
}

impl ResponseError for MagazineError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_code().to_string(),
            message: self.message().to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            MagazineError::NotFound(_) => StatusCode::NOT_FOUND,
            MagazineError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MagazineError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_renders_json_body() {
        let err = MagazineError::NotFound("PDF file not available for May 2024".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND_ERROR");
        assert_eq!(json["message"], "PDF file not available for May 2024");
    }

    #[test]
    fn internal_failures_keep_a_generic_message() {
        let err = MagazineError::request_failed();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), MagazineError::REQUEST_FAILED);
        assert_eq!(
            err.to_string(),
            "Internal error: An error occurred while processing your request"
        );
    }
}
