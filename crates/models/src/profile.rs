use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use thiserror::Error;

/// How a teacher delivers sessions
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TeachingMode {
    Online,
    Physical,
    Hybrid,
}

pub const MAX_EXPERIENCE_YEARS: i32 = 100;
pub const MAX_EDUCATION_LEN: usize = 100;
pub const MAX_BIO_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("experience years must be between 0 and 100, got {0}")]
    ExperienceOutOfRange(i32),
    #[error("hourly rate must be a positive amount, got {0}")]
    NonPositiveRate(f64),
    #[error("session duration must be a positive number of minutes, got {0}")]
    NonPositiveDuration(i32),
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Attributes submitted when a user first becomes a teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeacherProfile {
    pub teaching_mode: TeachingMode,
    pub bio: String,
    pub experience_years: i32,
    pub hourly_rate: f64,
    pub education: String,
    pub duration_per_session: i32,
}

impl NewTeacherProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_experience(self.experience_years)?;
        check_rate(self.hourly_rate)?;
        check_duration(self.duration_per_session)?;
        check_text("education", &self.education, MAX_EDUCATION_LEN)?;
        check_text("bio", &self.bio, MAX_BIO_LEN)
    }
}

/// Partial update of a teacher profile; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherProfilePatch {
    pub teaching_mode: Option<TeachingMode>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub education: Option<String>,
    pub duration_per_session: Option<i32>,
}

impl TeacherProfilePatch {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(years) = self.experience_years {
            check_experience(years)?;
        }
        if let Some(rate) = self.hourly_rate {
            check_rate(rate)?;
        }
        if let Some(minutes) = self.duration_per_session {
            check_duration(minutes)?;
        }
        if let Some(education) = &self.education {
            check_text("education", education, MAX_EDUCATION_LEN)?;
        }
        if let Some(bio) = &self.bio {
            check_text("bio", bio, MAX_BIO_LEN)?;
        }
        Ok(())
    }
}

fn check_experience(years: i32) -> Result<(), ProfileError> {
    if (0..=MAX_EXPERIENCE_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(ProfileError::ExperienceOutOfRange(years))
    }
}

fn check_rate(rate: f64) -> Result<(), ProfileError> {
    // NaN fails the comparison as well
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(ProfileError::NonPositiveRate(rate))
    }
}

fn check_duration(minutes: i32) -> Result<(), ProfileError> {
    if minutes > 0 {
        Ok(())
    } else {
        Err(ProfileError::NonPositiveDuration(minutes))
    }
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        return Err(ProfileError::Missing(field));
    }
    if value.chars().count() > max {
        return Err(ProfileError::TooLong { field, max });
    }
    Ok(())
}
