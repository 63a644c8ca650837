use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account row owned by the identity provider; `auth_subject` is the token's `sub` claim
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub auth_subject: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<Date>,
    pub profile_picture: Option<String>,
    pub city_id: Option<i32>,
    pub area: Option<String>,
    pub role: String, // student, teacher or admin
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::CityId",
        on_delete = "SetNull"
    )]
    City,
    #[sea_orm(has_one = "super::teacher::Entity")]
    Teacher,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
