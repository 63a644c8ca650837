use models::profile::TeachingMode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub teacher_id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub teaching_mode: TeachingMode,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub experience_years: i32,
    #[sea_orm(column_type = "Double")]
    pub hourly_rate: f64,
    pub education: String,
    pub duration_per_session: i32, // minutes
    pub is_verified: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::teacher_availability::Entity")]
    Availability,
    #[sea_orm(has_many = "super::teacher_language::Entity")]
    TeacherLanguages,
    #[sea_orm(has_many = "super::teacher_subject::Entity")]
    TeacherSubjects,
    #[sea_orm(has_many = "super::teacher_grade_level::Entity")]
    TeacherGradeLevels,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::teacher_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

// Many-to-many relationships through the association tables
impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_language::Relation::Language.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_language::Relation::Teacher.def().rev())
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_subject::Relation::Subject.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_subject::Relation::Teacher.def().rev())
    }
}

impl Related<super::grade_level::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_grade_level::Relation::GradeLevel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_grade_level::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
