use crate::{
    dtos::lookup::{CityResponse, GradeLevelResponse, NamedItem},
    error::ApiError,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::lookup::LookupService;

/// List all teaching languages
#[utoipa::path(
    get,
    path = "/languages",
    responses(
        (status = 200, description = "Languages ordered by id", body = Vec<NamedItem>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lookups"
)]
pub async fn get_languages(State(state): State<AppState>) -> Result<Json<Vec<NamedItem>>, ApiError> {
    let languages = LookupService::languages(&state.db).await?;
    Ok(Json(languages.into_iter().map(NamedItem::from).collect()))
}

/// List all subjects
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "Subjects ordered by id", body = Vec<NamedItem>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lookups"
)]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<NamedItem>>, ApiError> {
    let subjects = LookupService::subjects(&state.db).await?;
    Ok(Json(subjects.into_iter().map(NamedItem::from).collect()))
}

/// List all grade levels
#[utoipa::path(
    get,
    path = "/grade-levels",
    responses(
        (status = 200, description = "Grade levels ordered by id", body = Vec<GradeLevelResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lookups"
)]
pub async fn get_grade_levels(
    State(state): State<AppState>,
) -> Result<Json<Vec<GradeLevelResponse>>, ApiError> {
    let grade_levels = LookupService::grade_levels(&state.db).await?;
    Ok(Json(
        grade_levels
            .into_iter()
            .map(GradeLevelResponse::from)
            .collect(),
    ))
}

/// List all cities
#[utoipa::path(
    get,
    path = "/cities",
    responses(
        (status = 200, description = "Cities ordered by id", body = Vec<CityResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lookups"
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<Json<Vec<CityResponse>>, ApiError> {
    let cities = LookupService::cities(&state.db).await?;
    Ok(Json(cities.into_iter().map(CityResponse::from).collect()))
}
