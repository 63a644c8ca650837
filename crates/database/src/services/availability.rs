use crate::{
    entities::teacher_availability,
    error::{ServiceError, ServiceResult},
};
use log::{info, warn};
use models::availability::{AvailabilityWindow, TimeRange, WeeklySchedule};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct AvailabilityService;

impl AvailabilityService {
    /// All windows of a teacher in insertion order
    pub async fn get_availability(
        db: &DatabaseConnection,
        teacher_id: i32,
    ) -> Result<Vec<teacher_availability::Model>, DbErr> {
        teacher_availability::Entity::find()
            .filter(teacher_availability::Column::TeacherId.eq(teacher_id))
            .order_by_asc(teacher_availability::Column::AvailabilityId)
            .all(db)
            .await
    }

    /// Sets the teacher's windows to exactly `windows`.
    ///
    /// The delete and the bulk insert share one transaction, so a failure
    /// keeps the previous set.
    pub async fn replace_availability(
        db: &DatabaseConnection,
        teacher_id: i32,
        windows: &[AvailabilityWindow],
    ) -> Result<Vec<teacher_availability::Model>, DbErr> {
        let txn = db.begin().await?;

        let removed = teacher_availability::Entity::delete_many()
            .filter(teacher_availability::Column::TeacherId.eq(teacher_id))
            .exec(&txn)
            .await?
            .rows_affected;

        if !windows.is_empty() {
            let rows = windows.iter().map(|window| teacher_availability::ActiveModel {
                teacher_id: Set(teacher_id),
                day: Set(window.day()),
                start_time: Set(window.start()),
                end_time: Set(window.end()),
                ..Default::default()
            });

            teacher_availability::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        let stored = teacher_availability::Entity::find()
            .filter(teacher_availability::Column::TeacherId.eq(teacher_id))
            .order_by_asc(teacher_availability::Column::AvailabilityId)
            .all(&txn)
            .await?;

        txn.commit().await?;

        info!(
            "Replaced availability for teacher {teacher_id}: {removed} removed, {} stored",
            stored.len()
        );
        Ok(stored)
    }

    /// Changes the times of one window owned by `teacher_id`
    pub async fn update_window(
        db: &DatabaseConnection,
        teacher_id: i32,
        availability_id: i32,
        range: TimeRange,
    ) -> ServiceResult<teacher_availability::Model> {
        let window = Self::find_owned(db, teacher_id, availability_id).await?;

        let mut active: teacher_availability::ActiveModel = window.into();
        active.start_time = Set(range.start());
        active.end_time = Set(range.end());

        Ok(active.update(db).await?)
    }

    /// Removes one window owned by `teacher_id`
    pub async fn delete_window(
        db: &DatabaseConnection,
        teacher_id: i32,
        availability_id: i32,
    ) -> ServiceResult<()> {
        let result = teacher_availability::Entity::delete_many()
            .filter(teacher_availability::Column::AvailabilityId.eq(availability_id))
            .filter(teacher_availability::Column::TeacherId.eq(teacher_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::window_not_found(teacher_id, availability_id));
        }

        Ok(())
    }

    /// Groups stored rows per weekday
    pub fn weekly_schedule(rows: &[teacher_availability::Model]) -> WeeklySchedule {
        rows.iter()
            .filter_map(|row| match row.window() {
                Ok(window) => Some(window),
                Err(e) => {
                    warn!("Skipping availability {}: {e}", row.availability_id);
                    None
                }
            })
            .collect()
    }

    async fn find_owned(
        db: &DatabaseConnection,
        teacher_id: i32,
        availability_id: i32,
    ) -> ServiceResult<teacher_availability::Model> {
        teacher_availability::Entity::find_by_id(availability_id)
            .filter(teacher_availability::Column::TeacherId.eq(teacher_id))
            .one(db)
            .await?
            .ok_or_else(|| Self::window_not_found(teacher_id, availability_id))
    }

    fn window_not_found(teacher_id: i32, availability_id: i32) -> ServiceError {
        ServiceError::not_found(format!(
            "No availability window {availability_id} for teacher {teacher_id}"
        ))
    }
}
