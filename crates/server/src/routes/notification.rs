use crate::{
    auth::CurrentUser,
    dtos::notification::{MarkReadResponse, NotificationResponse},
    error::ApiError,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::notification::NotificationService;

/// The caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/me/notifications",
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(("jwt" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
    let notifications = NotificationService::list_for_user(&state.db, user.user_id()).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// Mark every unread notification of the caller as read
#[utoipa::path(
    patch,
    path = "/me/notifications/read",
    responses(
        (status = 200, description = "Number of notifications marked", body = MarkReadResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(("jwt" = [])),
    tag = "Notifications"
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MarkReadResponse>, ApiError> {
    let updated = NotificationService::mark_all_read(&state.db, user.user_id()).await?;
    Ok(Json(MarkReadResponse { updated }))
}
