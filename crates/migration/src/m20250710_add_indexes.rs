use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Availability is always read per teacher
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_availability_teacher_id")
                    .table(TeacherAvailability::Table)
                    .col(TeacherAvailability::TeacherId)
                    .to_owned(),
            )
            .await?;

        // Bookings are listed from both sides
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_teacher_id")
                    .table(Bookings::Table)
                    .col(Bookings::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_student_id")
                    .table(Bookings::Table)
                    .col(Bookings::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_student_id")
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_teacher_id")
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teacher_availability_teacher_id")
                    .table(TeacherAvailability::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum TeacherAvailability {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum Bookings {
    Table,
    TeacherId,
    StudentId,
}

#[derive(Iden)]
enum Notifications {
    Table,
    UserId,
}
