use crate::entities::notification;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, sea_query::Expr,
};

pub struct NotificationService;

impl NotificationService {
    /// Notifications of a user, newest first
    pub async fn list_for_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<notification::Model>, DbErr> {
        notification::Entity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .order_by_desc(notification::Column::NotificationId)
            .all(db)
            .await
    }

    /// Returns the number of notifications that were unread
    pub async fn mark_all_read(db: &DatabaseConnection, user_id: i32) -> Result<u64, DbErr> {
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::IsRead.eq(false))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts one unread notification; runs on the caller's connection or transaction
    pub async fn notify<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        message: impl Into<String>,
    ) -> Result<notification::Model, DbErr> {
        let notification = notification::ActiveModel {
            user_id: Set(user_id),
            message: Set(message.into()),
            is_read: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;

        debug!("Notified user {user_id}");
        Ok(notification)
    }
}
