use chrono::NaiveDateTime;
use database::{entities::booking, services::booking::NewBooking};
use models::{availability::WindowError, clock::format_wall_clock, days::Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::availability::WindowRequest;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateBookingRequest {
    pub teacher_id: i32,
    pub slot: WindowRequest,
    pub note: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_new_booking(self) -> Result<NewBooking, WindowError> {
        Ok(NewBooking {
            teacher_id: self.teacher_id,
            window: self.slot.into_window()?,
            note: self.note.filter(|note| !note.trim().is_empty()),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub teacher_id: i32,
    pub student_id: i32,
    #[schema(value_type = String, example = "Wednesday")]
    pub day: Weekday,
    pub start: String,
    pub end: String,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<booking::Model> for BookingResponse {
    fn from(booking: booking::Model) -> Self {
        Self {
            id: booking.booking_id,
            teacher_id: booking.teacher_id,
            student_id: booking.student_id,
            day: booking.day,
            start: format_wall_clock(booking.start_time),
            end: format_wall_clock(booking.end_time),
            note: booking.note,
            created_at: booking.created_at,
        }
    }
}
