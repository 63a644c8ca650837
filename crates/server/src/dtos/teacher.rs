use super::lookup::{GradeLevelResponse, NamedItem};
use chrono::NaiveDateTime;
use database::{entities::teacher, services::profile::TeacherProfile};
use models::profile::{NewTeacherProfile, TeacherProfilePatch, TeachingMode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTeacherRequest {
    #[schema(value_type = String, example = "online")]
    pub teaching_mode: TeachingMode,
    pub bio: String,
    pub experience_years: i32,
    pub hourly_rate: f64,
    pub education: String,
    /// Minutes per session
    #[serde(default = "default_duration")]
    pub duration_per_session: i32,
}

fn default_duration() -> i32 {
    60
}

impl From<CreateTeacherRequest> for NewTeacherProfile {
    fn from(request: CreateTeacherRequest) -> Self {
        Self {
            teaching_mode: request.teaching_mode,
            bio: request.bio,
            experience_years: request.experience_years,
            hourly_rate: request.hourly_rate,
            education: request.education,
            duration_per_session: request.duration_per_session,
        }
    }
}

/// Only the supplied fields change
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateTeacherRequest {
    #[schema(value_type = Option<String>, example = "hybrid")]
    pub teaching_mode: Option<TeachingMode>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub education: Option<String>,
    pub duration_per_session: Option<i32>,
}

impl From<UpdateTeacherRequest> for TeacherProfilePatch {
    fn from(request: UpdateTeacherRequest) -> Self {
        Self {
            teaching_mode: request.teaching_mode,
            bio: request.bio,
            experience_years: request.experience_years,
            hourly_rate: request.hourly_rate,
            education: request.education,
            duration_per_session: request.duration_per_session,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: i32,
    pub user_id: i32,
    #[schema(value_type = String, example = "online")]
    pub teaching_mode: TeachingMode,
    pub bio: String,
    pub experience_years: i32,
    pub hourly_rate: f64,
    pub education: String,
    pub duration_per_session: i32,
    pub is_verified: bool,
    pub rating: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<teacher::Model> for TeacherResponse {
    fn from(teacher: teacher::Model) -> Self {
        Self {
            id: teacher.teacher_id,
            user_id: teacher.user_id,
            teaching_mode: teacher.teaching_mode,
            bio: teacher.bio,
            experience_years: teacher.experience_years,
            hourly_rate: teacher.hourly_rate,
            education: teacher.education,
            duration_per_session: teacher.duration_per_session,
            is_verified: teacher.is_verified,
            rating: teacher.rating,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}

/// Public view of a teacher with account details and linked lookups
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherProfileResponse {
    #[serde(flatten)]
    pub teacher: TeacherResponse,
    pub name: String,
    pub profile_picture: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub languages: Vec<NamedItem>,
    pub subjects: Vec<NamedItem>,
    pub grade_levels: Vec<GradeLevelResponse>,
}

impl From<TeacherProfile> for TeacherProfileResponse {
    fn from(profile: TeacherProfile) -> Self {
        Self {
            teacher: profile.teacher.into(),
            name: profile.user.name,
            profile_picture: profile.user.profile_picture,
            city: profile.city.map(|city| city.city_name),
            area: profile.user.area,
            languages: profile.languages.into_iter().map(NamedItem::from).collect(),
            subjects: profile.subjects.into_iter().map(NamedItem::from).collect(),
            grade_levels: profile
                .grade_levels
                .into_iter()
                .map(GradeLevelResponse::from)
                .collect(),
        }
    }
}
