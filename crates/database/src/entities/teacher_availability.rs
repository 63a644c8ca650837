use models::{
    availability::{AvailabilityWindow, WindowError},
    days::Weekday,
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One weekly availability window; value-like child of a teacher
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teacher_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub availability_id: i32,
    pub teacher_id: i32,
    #[sea_orm(column_type = "Text")]
    pub day: Weekday,
    pub start_time: Time,
    pub end_time: Time,
}

impl Model {
    pub fn window(&self) -> Result<AvailabilityWindow, WindowError> {
        AvailabilityWindow::new(self.day, self.start_time, self.end_time)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::TeacherId",
        on_delete = "Cascade"
    )]
    Teacher,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
