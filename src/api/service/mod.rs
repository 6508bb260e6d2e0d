pub mod endpoints;
pub mod router;
pub mod types;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db;

#[derive(Clone)]
pub struct State {
    pub db: db::Database,
}

impl State {
    pub fn new(db: db::Database) -> Self {
        Self { db }
    }
}

impl axum::extract::FromRef<State> for sqlx::MySqlPool {
    fn from_ref(input: &State) -> Self {
        input.db.pool.clone()
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl types::ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: types::ErrorBody {
                error: error.into(),
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, types::SERVER_ERROR)
    }
}

// The cause stays in the log; callers only see the generic body.
impl From<sqlx::Error> for types::ErrorResponse {
    fn from(value: sqlx::Error) -> Self {
        log::error!("db returned error: {value}");
        types::ErrorResponse::server_error()
    }
}
