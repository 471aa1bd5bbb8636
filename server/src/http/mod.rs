use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub mod lang;
pub mod pages;
pub mod render;
pub mod svc;

// handler errors are logged and turned into a bare 500
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal server error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
