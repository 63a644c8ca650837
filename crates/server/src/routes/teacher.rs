use crate::{
    auth::CurrentUser,
    dtos::{
        availability::AvailabilityResponse,
        teacher::{CreateTeacherRequest, TeacherProfileResponse, TeacherResponse, UpdateTeacherRequest},
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
use database::services::{availability::AvailabilityService, profile::ProfileService};
use models::profile::{NewTeacherProfile, TeacherProfilePatch};

/// List every teacher profile
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "All teacher profiles", body = Vec<TeacherProfileResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherProfileResponse>>, ApiError> {
    let profiles = ProfileService::list_profiles(&state.db).await?;
    Ok(Json(
        profiles
            .into_iter()
            .map(TeacherProfileResponse::from)
            .collect(),
    ))
}

/// Get one teacher profile
#[utoipa::path(
    get,
    path = "/teachers/{teacher_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = TeacherProfileResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<i32>,
) -> Result<Json<TeacherProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile(&state.db, teacher_id).await?;
    Ok(Json(profile.into()))
}

/// Weekly availability of a teacher
#[utoipa::path(
    get,
    path = "/teachers/{teacher_id}/availability",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Availability windows", body = AvailabilityResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_availability(
    State(state): State<AppState>,
    Path(teacher_id): Path<i32>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    // 404 for unknown teachers instead of an empty schedule
    if !ProfileService::teacher_exists(&state.db, teacher_id).await? {
        return Err(ApiError::NotFound(format!("Teacher {teacher_id} not found")));
    }

    let rows = AvailabilityService::get_availability(&state.db, teacher_id).await?;
    let schedule = AvailabilityService::weekly_schedule(&rows);
    Ok(Json(AvailabilityResponse::new(rows, &schedule)))
}

/// The caller's own teacher profile
#[utoipa::path(
    get,
    path = "/me/teacher",
    responses(
        (status = 200, description = "Profile found", body = TeacherProfileResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<TeacherProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile_by_user(&state.db, user.user_id()).await?;
    Ok(Json(profile.into()))
}

/// Become a teacher
#[utoipa::path(
    post,
    path = "/me/teacher",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Profile created", body = TeacherResponse),
        (status = 400, description = "Invalid profile"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 409, description = "Caller already has a teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn create_my_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let profile = NewTeacherProfile::from(request);
    profile.validate()?;

    let teacher = ProfileService::create_profile(&state.db, user.user_id(), profile).await?;
    Ok((StatusCode::CREATED, Json(teacher.into())))
}

/// Change some fields of the caller's profile
#[utoipa::path(
    put,
    path = "/me/teacher",
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Profile updated", body = TeacherResponse),
        (status = 400, description = "Invalid field value"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<UpdateTeacherRequest>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let patch = TeacherProfilePatch::from(request);
    patch.validate()?;

    let teacher = ProfileService::update_profile(&state.db, user.user_id(), patch).await?;
    Ok(Json(teacher.into()))
}

/// Delete the caller's account and everything it owns
#[utoipa::path(
    delete,
    path = "/me/teacher",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Account already gone")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<StatusCode, ApiError> {
    match ProfileService::delete_profile(&state.db, user.user_id()).await? {
        0 => Err(ApiError::NotFound(format!("User {} not found", user.user_id()))),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
