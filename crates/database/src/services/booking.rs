use crate::{
    entities::{booking, teacher, user},
    error::{ServiceError, ServiceResult},
    services::notification::NotificationService,
};
use log::info;
use models::{availability::AvailabilityWindow, clock::format_wall_clock};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

/// A session request from a student
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub teacher_id: i32,
    pub window: AvailabilityWindow,
    pub note: Option<String>,
}

pub struct BookingService;

impl BookingService {
    /// Stores the booking and notifies the teacher in the same transaction
    pub async fn create_booking(
        db: &DatabaseConnection,
        student_id: i32,
        request: NewBooking,
    ) -> ServiceResult<booking::Model> {
        let txn = db.begin().await?;

        let teacher = teacher::Entity::find_by_id(request.teacher_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("Teacher {} not found", request.teacher_id))
            })?;
        let student = user::Entity::find_by_id(student_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User {student_id} not found")))?;

        let window = request.window;
        let booking = booking::ActiveModel {
            teacher_id: Set(teacher.teacher_id),
            student_id: Set(student.user_id),
            day: Set(window.day()),
            start_time: Set(window.start()),
            end_time: Set(window.end()),
            note: Set(request.note),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let message = format!(
            "{} booked a session on {} {}-{}",
            student.name,
            window.day(),
            format_wall_clock(window.start()),
            format_wall_clock(window.end())
        );
        NotificationService::notify(&txn, teacher.user_id, message).await?;

        txn.commit().await?;

        info!(
            "Booking {} created for teacher {} by user {student_id}",
            booking.booking_id, teacher.teacher_id
        );
        Ok(booking)
    }

    pub async fn bookings_for_teacher(
        db: &DatabaseConnection,
        teacher_id: i32,
    ) -> Result<Vec<booking::Model>, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::TeacherId.eq(teacher_id))
            .order_by_asc(booking::Column::BookingId)
            .all(db)
            .await
    }

    pub async fn bookings_for_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<booking::Model>, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::StudentId.eq(student_id))
            .order_by_asc(booking::Column::BookingId)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{seed_teacher, seed_user, setup, time};
    use models::days::Weekday;

    fn request(teacher_id: i32) -> NewBooking {
        NewBooking {
            teacher_id,
            window: AvailabilityWindow::parse(Weekday::Wednesday, "16:00", "17:00").unwrap(),
            note: Some("Algebra revision".to_string()),
        }
    }

    #[tokio::test]
    async fn booking_notifies_teacher() {
        let db = setup().await;
        let teacher = seed_teacher(&db, "teacher").await;
        let student = seed_user(&db, "student").await;

        let booking = BookingService::create_booking(&db, student.user_id, request(teacher.teacher_id))
            .await
            .unwrap();
        assert_eq!(booking.start_time, time(16, 0));
        assert_eq!(booking.end_time, time(17, 0));

        let for_teacher = BookingService::bookings_for_teacher(&db, teacher.teacher_id)
            .await
            .unwrap();
        assert_eq!(for_teacher, vec![booking.clone()]);
        let for_student = BookingService::bookings_for_student(&db, student.user_id)
            .await
            .unwrap();
        assert_eq!(for_student, vec![booking]);

        let inbox = NotificationService::list_for_user(&db, teacher.user_id)
            .await
            .unwrap();
        assert_eq!(inbox.len(), 1);
        assert!(inbox[0].message.contains("Wednesday 16:00-17:00"));
        assert!(!inbox[0].is_read);

        NotificationService::mark_all_read(&db, teacher.user_id)
            .await
            .unwrap();
        let inbox = NotificationService::list_for_user(&db, teacher.user_id)
            .await
            .unwrap();
        assert!(inbox[0].is_read);
    }

    #[tokio::test]
    async fn unknown_teacher_is_not_found() {
        let db = setup().await;
        let student = seed_user(&db, "student").await;

        let err = BookingService::create_booking(&db, student.user_id, request(404))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(
            BookingService::bookings_for_student(&db, student.user_id)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
