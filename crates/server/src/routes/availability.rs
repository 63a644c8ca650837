use crate::{
    auth::CurrentUser,
    dtos::availability::{
        AvailabilityResponse, ReplaceAvailabilityRequest, UpdateWindowRequest, WindowResponse,
    },
    error::ApiError,
    extract::AppJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::availability::AvailabilityService;

/// The caller's weekly availability
#[utoipa::path(
    get,
    path = "/me/teacher/availability",
    responses(
        (status = 200, description = "Availability windows", body = AvailabilityResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "Availability"
)]
pub async fn get_my_availability(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let teacher_id = user.teacher_id(&state).await?;

    let rows = AvailabilityService::get_availability(&state.db, teacher_id).await?;
    let schedule = AvailabilityService::weekly_schedule(&rows);
    Ok(Json(AvailabilityResponse::new(rows, &schedule)))
}

/// Replace all of the caller's windows; an empty list clears them
#[utoipa::path(
    put,
    path = "/me/teacher/availability",
    request_body = ReplaceAvailabilityRequest,
    responses(
        (status = 200, description = "Stored windows", body = AvailabilityResponse),
        (status = 400, description = "A window is malformed or ends before it starts"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "Availability"
)]
pub async fn replace_my_availability(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<ReplaceAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let windows = request.into_windows()?;
    let teacher_id = user.teacher_id(&state).await?;

    let rows = AvailabilityService::replace_availability(&state.db, teacher_id, &windows).await?;
    let schedule = AvailabilityService::weekly_schedule(&rows);
    Ok(Json(AvailabilityResponse::new(rows, &schedule)))
}

/// Move one of the caller's windows to new times
#[utoipa::path(
    patch,
    path = "/me/teacher/availability/{availability_id}",
    params(
        ("availability_id" = i32, Path, description = "Availability window ID")
    ),
    request_body = UpdateWindowRequest,
    responses(
        (status = 200, description = "Window updated", body = WindowResponse),
        (status = 400, description = "Malformed times or end before start"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "No such window owned by the caller")
    ),
    security(("jwt" = [])),
    tag = "Availability"
)]
pub async fn update_my_window(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(availability_id): Path<i32>,
    AppJson(request): AppJson<UpdateWindowRequest>,
) -> Result<Json<WindowResponse>, ApiError> {
    let range = request.into_range()?;
    let teacher_id = user.teacher_id(&state).await?;

    let row =
        AvailabilityService::update_window(&state.db, teacher_id, availability_id, range).await?;
    Ok(Json(row.into()))
}

/// Remove one of the caller's windows
#[utoipa::path(
    delete,
    path = "/me/teacher/availability/{availability_id}",
    params(
        ("availability_id" = i32, Path, description = "Availability window ID")
    ),
    responses(
        (status = 204, description = "Window deleted"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "No such window owned by the caller")
    ),
    security(("jwt" = [])),
    tag = "Availability"
)]
pub async fn delete_my_window(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(availability_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let teacher_id = user.teacher_id(&state).await?;

    AvailabilityService::delete_window(&state.db, teacher_id, availability_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
