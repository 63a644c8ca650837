use database::entities::{city, grade_level, language, subject};
use serde::Serialize;
use utoipa::ToSchema;

/// A language or subject
#[derive(Debug, Serialize, ToSchema)]
pub struct NamedItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeLevelResponse {
    pub id: i32,
    pub level: String,
    pub sub_level: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub region: Option<String>,
}

impl From<language::Model> for NamedItem {
    fn from(language: language::Model) -> Self {
        Self {
            id: language.language_id,
            name: language.name,
        }
    }
}

impl From<subject::Model> for NamedItem {
    fn from(subject: subject::Model) -> Self {
        Self {
            id: subject.subject_id,
            name: subject.name,
        }
    }
}

impl From<grade_level::Model> for GradeLevelResponse {
    fn from(grade_level: grade_level::Model) -> Self {
        Self {
            id: grade_level.grade_level_id,
            level: grade_level.level,
            sub_level: grade_level.sub_level,
        }
    }
}

impl From<city::Model> for CityResponse {
    fn from(city: city::Model) -> Self {
        Self {
            id: city.city_id,
            name: city.city_name,
            region: city.region,
        }
    }
}
