use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

use crate::store::StoreError;
use crate::validation::ValidationError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    Validation(ValidationError),

    #[display(fmt = "{} not found", _0)]
    NotFound(&'static str),

    #[display(fmt = "{}", _0)]
    Store(StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::MalformedId(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ApiError::Store(e) if status.is_server_error() => {
                error!(error = %e, "Storage operation failed");
                if status == StatusCode::SERVICE_UNAVAILABLE {
                    "Storage unavailable".to_string()
                } else {
                    "Internal Server Error".to_string()
                }
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FILL_ALL_FIELDS;

    #[test]
    fn maps_to_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError(FILL_ALL_FIELDS)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("Employee").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::MalformedId("x".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Unavailable("down".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(StoreError::decode("name", "bad")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            ApiError::from(ValidationError(FILL_ALL_FIELDS)).to_string(),
            "Please fill all fields"
        );
        assert_eq!(ApiError::NotFound("Leave request").to_string(), "Leave request not found");
    }
}
