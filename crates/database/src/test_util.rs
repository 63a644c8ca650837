use crate::{
    entities::{city, grade_level, language, subject, teacher, user},
    services::profile::ProfileService,
};
use chrono::NaiveTime;
use migration::{Migrator, MigratorTrait};
use models::profile::{NewTeacherProfile, TeachingMode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

/// Ids of the rows inserted by [`seed_lookups`], in insertion order
pub struct SeededLookups {
    pub languages: Vec<i32>,
    pub subjects: Vec<i32>,
    pub grade_levels: Vec<i32>,
}

/// Fresh in-memory database with every migration applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub async fn seed_user(db: &DatabaseConnection, subject: &str) -> user::Model {
    user::ActiveModel {
        auth_subject: Set(subject.to_string()),
        name: Set(format!("User {subject}")),
        email: Set(format!("{subject}@example.com")),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub fn profile_input() -> NewTeacherProfile {
    NewTeacherProfile {
        teaching_mode: TeachingMode::Online,
        bio: "Maths and physics tutor".to_string(),
        experience_years: 5,
        hourly_rate: 25.0,
        education: "BSc".to_string(),
        duration_per_session: 60,
    }
}

/// A user with a teacher profile built from [`profile_input`]
pub async fn seed_teacher(db: &DatabaseConnection, subject: &str) -> teacher::Model {
    let user = seed_user(db, subject).await;
    ProfileService::create_profile(db, user.user_id, profile_input())
        .await
        .unwrap()
}

pub async fn seed_lookups(db: &DatabaseConnection) -> SeededLookups {
    let mut languages = Vec::new();
    for name in ["English", "Urdu", "French"] {
        let row = language::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        languages.push(row.language_id);
    }

    let mut subjects = Vec::new();
    for name in ["Mathematics", "Physics"] {
        let row = subject::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        subjects.push(row.subject_id);
    }

    let mut grade_levels = Vec::new();
    for (level, sub_level) in [("Primary", "Grade 5"), ("Secondary", "Grade 9")] {
        let row = grade_level::ActiveModel {
            level: Set(level.to_string()),
            sub_level: Set(sub_level.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        grade_levels.push(row.grade_level_id);
    }

    city::ActiveModel {
        city_name: Set("Lahore".to_string()),
        region: Set(Some("Punjab".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    SeededLookups {
        languages,
        subjects,
        grade_levels,
    }
}
