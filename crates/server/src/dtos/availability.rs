use database::entities::teacher_availability;
use models::{
    availability::{AvailabilityWindow, TimeRange, WeeklySchedule, WindowError},
    clock::format_wall_clock,
    days::Weekday,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One weekly window as submitted by a teacher
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WindowRequest {
    #[schema(value_type = String, example = "Monday")]
    pub day: Weekday,
    /// `HH:MM`, `HH:MM:SS` or `hh:mm AM`
    #[serde(alias = "start_time")]
    #[schema(example = "09:00")]
    pub start: String,
    #[serde(alias = "end_time")]
    #[schema(example = "10:00")]
    pub end: String,
}

impl WindowRequest {
    pub fn into_window(self) -> Result<AvailabilityWindow, WindowError> {
        AvailabilityWindow::parse(self.day, &self.start, &self.end)
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReplaceAvailabilityRequest {
    pub windows: Vec<WindowRequest>,
}

impl ReplaceAvailabilityRequest {
    pub fn into_windows(self) -> Result<Vec<AvailabilityWindow>, WindowError> {
        self.windows
            .into_iter()
            .map(WindowRequest::into_window)
            .collect()
    }
}

/// New times for an existing window; the day is kept
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateWindowRequest {
    #[serde(alias = "start_time")]
    #[schema(example = "13:00")]
    pub start: String,
    #[serde(alias = "end_time")]
    #[schema(example = "14:30")]
    pub end: String,
}

impl UpdateWindowRequest {
    pub fn into_range(self) -> Result<TimeRange, WindowError> {
        TimeRange::parse(&self.start, &self.end)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WindowResponse {
    pub id: i32,
    #[schema(value_type = String, example = "Monday")]
    pub day: Weekday,
    #[schema(example = "09:00")]
    pub start: String,
    #[schema(example = "10:00")]
    pub end: String,
}

impl From<teacher_availability::Model> for WindowResponse {
    fn from(row: teacher_availability::Model) -> Self {
        Self {
            id: row.availability_id,
            day: row.day,
            start: format_wall_clock(row.start_time),
            end: format_wall_clock(row.end_time),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub windows: Vec<WindowResponse>,
    /// Days with at least one window as `MTWRFSU` letters
    #[schema(example = "MWF")]
    pub days: String,
}

impl AvailabilityResponse {
    pub fn new(rows: Vec<teacher_availability::Model>, schedule: &WeeklySchedule) -> Self {
        Self {
            days: schedule.days().to_string(),
            windows: rows.into_iter().map(WindowResponse::from).collect(),
        }
    }
}
