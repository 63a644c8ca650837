use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grade_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub grade_level_id: i32,
    pub level: String,     // e.g. "Secondary"
    pub sub_level: String, // e.g. "Grade 9"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_grade_level::Entity")]
    TeacherGradeLevels,
}

impl Related<super::teacher_grade_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherGradeLevels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
