use crate::{
    auth::CurrentUser, dtos::association::IdsRequest, error::ApiError, extract::AppJson,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::association::AssociationService;
use models::association::AssociationKind;

async fn replace(
    state: &AppState,
    user: &CurrentUser,
    kind: AssociationKind,
    request: IdsRequest,
) -> Result<Json<IdsRequest>, ApiError> {
    let teacher_id = user.teacher_id(state).await?;

    let ids =
        AssociationService::update_associations(&state.db, teacher_id, kind, &request.ids).await?;
    Ok(Json(IdsRequest { ids }))
}

/// Replace the languages the caller teaches in
#[utoipa::path(
    put,
    path = "/me/teacher/languages",
    request_body = IdsRequest,
    responses(
        (status = 200, description = "Linked language ids", body = IdsRequest),
        (status = 400, description = "Unknown language id"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn put_my_languages(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<IdsRequest>,
) -> Result<Json<IdsRequest>, ApiError> {
    replace(&state, &user, AssociationKind::Languages, request).await
}

/// Replace the subjects the caller teaches
#[utoipa::path(
    put,
    path = "/me/teacher/subjects",
    request_body = IdsRequest,
    responses(
        (status = 200, description = "Linked subject ids", body = IdsRequest),
        (status = 400, description = "Unknown subject id"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn put_my_subjects(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<IdsRequest>,
) -> Result<Json<IdsRequest>, ApiError> {
    replace(&state, &user, AssociationKind::Subjects, request).await
}

/// Replace the grade levels the caller teaches
#[utoipa::path(
    put,
    path = "/me/teacher/grade-levels",
    request_body = IdsRequest,
    responses(
        (status = 200, description = "Linked grade level ids", body = IdsRequest),
        (status = 400, description = "Unknown grade level id"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "My profile"
)]
pub async fn put_my_grade_levels(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<IdsRequest>,
) -> Result<Json<IdsRequest>, ApiError> {
    replace(&state, &user, AssociationKind::GradeLevels, request).await
}
