use axum::routing::{get, post};

use super::endpoints::{add_school, list_schools};
use super::State;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/addSchool", post(add_school))
        .route("/listSchools", get(list_schools))
        .with_state(state)
}
