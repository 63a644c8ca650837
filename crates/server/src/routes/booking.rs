use crate::{
    auth::CurrentUser,
    dtos::booking::{BookingResponse, CreateBookingRequest},
    error::ApiError,
    extract::AppJson,
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use database::{entities::booking, services::booking::BookingService};

fn to_responses(bookings: Vec<booking::Model>) -> Json<Vec<BookingResponse>> {
    Json(bookings.into_iter().map(BookingResponse::from).collect())
}

/// Sessions the caller booked as a student
#[utoipa::path(
    get,
    path = "/me/bookings",
    responses(
        (status = 200, description = "Bookings made by the caller", body = Vec<BookingResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(("jwt" = [])),
    tag = "Bookings"
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = BookingService::bookings_for_student(&state.db, user.user_id()).await?;
    Ok(to_responses(bookings))
}

/// Book a session with a teacher; the teacher is notified
#[utoipa::path(
    post,
    path = "/me/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Malformed slot"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Teacher not found")
    ),
    security(("jwt" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: CurrentUser,
    AppJson(request): AppJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let booking = request.into_new_booking()?;

    let created = BookingService::create_booking(&state.db, user.user_id(), booking).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Sessions booked with the caller as teacher
#[utoipa::path(
    get,
    path = "/me/teacher/bookings",
    responses(
        (status = 200, description = "Bookings received", body = Vec<BookingResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Caller has no teacher profile")
    ),
    security(("jwt" = [])),
    tag = "Bookings"
)]
pub async fn list_teacher_bookings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let teacher_id = user.teacher_id(&state).await?;

    let bookings = BookingService::bookings_for_teacher(&state.db, teacher_id).await?;
    Ok(to_responses(bookings))
}
