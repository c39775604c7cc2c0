use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use doubledate_core::RegistryError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-terminal errors with a fixed HTTP status. Duplicate ids are
/// conceptually a conflict but the wire contract serves them as 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("User already exists")]
    Conflict,
}

impl From<RegistryError> for ServerError {
    fn from(error: RegistryError) -> Self {
        let api = match error {
            RegistryError::AlreadyExists(_) => ApiError::Conflict,
            RegistryError::NotFound(_) => ApiError::NotFound,
            RegistryError::InvalidInput(message) => ApiError::BadRequest(message),
        };
        ServerError::Api(api)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ServerError::Api(e) => {
                warn!("{}", e);
                let status = match e {
                    ApiError::Forbidden => StatusCode::FORBIDDEN,
                    ApiError::BadRequest(_) | ApiError::Conflict => StatusCode::BAD_REQUEST,
                    ApiError::NotFound => StatusCode::NOT_FOUND,
                };
                (status, e.to_string())
            }
            ServerError::Io(e) => {
                error!(%e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected Error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}
