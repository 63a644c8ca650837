use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub language_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_language::Entity")]
    TeacherLanguages,
}

impl Related<super::teacher_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherLanguages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
