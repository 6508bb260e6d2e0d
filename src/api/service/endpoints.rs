use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use sqlx::MySqlPool;

use crate::geo;
use crate::model::{Coord, RankedSchool, School, SchoolCandidate};
use crate::validation;

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

pub async fn add_school(
    State(pool): State<MySqlPool>,
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponse>)> {
    let Json(body) = payload.map_err(|e| {
        log::debug!("rejected addSchool body: {e}");
        ErrorResponse::bad_request(INVALID_INPUT)
    })?;

    let school = SchoolCandidate::from_json(body)
        .and_then(|candidate| validation::validate_school(&candidate))
        .ok_or_else(|| ErrorResponse::bad_request(INVALID_INPUT))?;

    let school_id = sqlx::query("
        INSERT INTO schools (name, address, latitude, longitude)
        VALUES (?, ?, ?, ?);
    ")
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(&pool)
        .await?
        .last_insert_id();

    log::info!("added school {school_id} ({})", school.name);

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse {
            message: SCHOOL_ADDED.to_owned(),
            school_id,
        }),
    ))
}

pub async fn list_schools(
    State(pool): State<MySqlPool>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<RankedSchool>>> {
    let Query(pairs) = query.map_err(|e| {
        log::debug!("rejected listSchools query: {e}");
        ErrorResponse::bad_request(INVALID_COORDINATES)
    })?;
    let r = ListSchoolsRequest::from_pairs(pairs);

    let origin = validation::parse_coord(r.latitude.as_deref(), r.longitude.as_deref())
        .ok_or_else(|| ErrorResponse::bad_request(INVALID_COORDINATES))?;

    let schools: Vec<School> = sqlx::query_as("
        SELECT id, name, address, latitude, longitude
        FROM schools
        ORDER BY id;
    ")
        .fetch_all(&pool)
        .await?;

    Ok(Json(rank_by_distance(schools, origin)))
}

/// Annotates each school with its distance from `origin` and sorts nearest
/// first. The sort is stable, so equal distances keep their input order.
pub fn rank_by_distance(schools: Vec<School>, origin: Coord) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| RankedSchool {
            distance: geo::distance_km(origin, school.coord()),
            school,
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
